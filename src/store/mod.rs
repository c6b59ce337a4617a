//! In-memory store for the demo backend.
//!
//! The process is the source of truth; nothing is persisted and state is
//! lost on restart, which is acceptable only because this is explicitly a
//! demo. A production build swaps this module for a database-backed
//! repository behind the same interface.

mod repository;

pub use repository::*;

use chrono::Utc;

use crate::models::{Gallery, Photo};

/// Build the pre-seeded demo catalog: one sports gallery and one family
/// gallery, with already-hosted preview assets.
pub fn demo_catalog() -> Vec<Gallery> {
    let now = Utc::now().to_rfc3339();

    vec![
        Gallery {
            id: "HUSKIES-0907".to_string(),
            label: "Huskies vs Wildcats (Sept 7)".to_string(),
            passcode: "huskies2025".to_string(),
            price: 25.0,
            photos: vec![
                Photo {
                    id: "p1".to_string(),
                    url: "https://images.unsplash.com/photo-1517649763962-0c623066013b?q=80&w=1800&auto=format&fit=crop".to_string(),
                    thumb: "https://images.unsplash.com/photo-1517649763962-0c623066013b?q=80&w=600&auto=format&fit=crop".to_string(),
                    title: "Game Winner".to_string(),
                    tags: vec!["sports".to_string(), "action".to_string()],
                },
                Photo {
                    id: "p2".to_string(),
                    url: "https://images.unsplash.com/photo-1508804185872-d7badad00f7d?q=80&w=1800&auto=format&fit=crop".to_string(),
                    thumb: "https://images.unsplash.com/photo-1508804185872-d7badad00f7d?q=80&w=600&auto=format&fit=crop".to_string(),
                    title: "Slide into Home".to_string(),
                    tags: vec!["sports".to_string()],
                },
                Photo {
                    id: "p3".to_string(),
                    url: "https://images.unsplash.com/photo-1582582429416-9fa99ce1a7c4?q=80&w=1800&auto=format&fit=crop".to_string(),
                    thumb: "https://images.unsplash.com/photo-1582582429416-9fa99ce1a7c4?q=80&w=600&auto=format&fit=crop".to_string(),
                    title: "Team Huddle".to_string(),
                    tags: vec!["team".to_string()],
                },
            ],
            cover_url: "https://images.unsplash.com/photo-1521417531039-74fdf9de0c3b?q=80&w=2000&auto=format&fit=crop".to_string(),
            created_at: now.clone(),
        },
        Gallery {
            id: "SMITH-FAMILY".to_string(),
            label: "Smith Family — Fall Minis".to_string(),
            passcode: "smith2025".to_string(),
            price: 30.0,
            photos: vec![
                Photo {
                    id: "f1".to_string(),
                    url: "https://images.unsplash.com/photo-1583336663277-620dc1996580?q=80&w=1800&auto=format&fit=crop".to_string(),
                    thumb: "https://images.unsplash.com/photo-1583336663277-620dc1996580?q=80&w=600&auto=format&fit=crop".to_string(),
                    title: "Golden Hour".to_string(),
                    tags: vec!["family".to_string(), "portrait".to_string()],
                },
                Photo {
                    id: "f2".to_string(),
                    url: "https://images.unsplash.com/photo-1504196606672-aef5c9cefc92?q=80&w=1800&auto=format&fit=crop".to_string(),
                    thumb: "https://images.unsplash.com/photo-1504196606672-aef5c9cefc92?q=80&w=600&auto=format&fit=crop".to_string(),
                    title: "Candid Laughs".to_string(),
                    tags: vec!["family".to_string()],
                },
                Photo {
                    id: "f3".to_string(),
                    url: "https://images.unsplash.com/photo-1551218808-94e220e084d2?q=80&w=1800&auto=format&fit=crop".to_string(),
                    thumb: "https://images.unsplash.com/photo-1551218808-94e220e084d2?q=80&w=600&auto=format&fit=crop".to_string(),
                    title: "Walk in the Park".to_string(),
                    tags: vec!["family".to_string()],
                },
            ],
            cover_url: "https://images.unsplash.com/photo-1441123694162-e54a981ceba3?q=80&w=2000&auto=format&fit=crop".to_string(),
            created_at: now,
        },
    ]
}
