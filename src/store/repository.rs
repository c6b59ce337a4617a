//! In-memory repository for all data operations.
//!
//! Everything flows through a single `RwLock`, which preserves the
//! run-to-completion semantics of the original single-user demo while the
//! HTTP surface is served concurrently. The repository is injected into
//! handlers via `AppState`, so tests can substitute a fixture catalog
//! instead of relying on process-wide state.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{
    gallery_id_from_label, CartItem, CartView, CatalogSnapshot, CreateGalleryRequest, Gallery,
    OrderSummary, Photo, RevisionInfo, Session, DEFAULT_PRICE_PER_PHOTO,
};

/// One client session: the gallery opened by the passcode plus the cart
/// scoped to it.
#[derive(Debug, Clone)]
struct SessionState {
    session: Session,
    cart: Vec<CartItem>,
}

/// Mutable store guts behind the lock.
#[derive(Debug)]
struct Store {
    /// Insertion-ordered. Passcode lookup walks this in order, so a
    /// duplicate passcode resolves to the earliest gallery (known quirk,
    /// kept deterministic rather than fixed).
    galleries: Vec<Gallery>,
    sessions: HashMap<String, SessionState>,
    revision_id: i64,
    generated_at: String,
}

impl Store {
    /// Bump the revision after a successful mutation.
    fn touch(&mut self) -> i64 {
        self.revision_id += 1;
        self.generated_at = Utc::now().to_rfc3339();
        self.revision_id
    }

    fn gallery(&self, id: &str) -> Option<&Gallery> {
        self.galleries.iter().find(|g| g.id == id)
    }

    /// Sum of current per-photo prices over the cart. An item whose
    /// gallery has vanished contributes zero.
    fn cart_total(&self, cart: &[CartItem]) -> f64 {
        cart.iter()
            .map(|it| self.gallery(&it.gallery_id).map(|g| g.price).unwrap_or(0.0))
            .sum()
    }
}

/// Repository for all catalog, session, and cart operations.
pub struct Repository {
    inner: RwLock<Store>,
}

impl Repository {
    /// Create a repository over the given starting catalog.
    pub fn new(galleries: Vec<Gallery>) -> Self {
        let generated_at = Utc::now().to_rfc3339();
        Self {
            inner: RwLock::new(Store {
                galleries,
                sessions: HashMap::new(),
                revision_id: 0,
                generated_at,
            }),
        }
    }

    /// Get the current revision ID.
    pub async fn revision_id(&self) -> i64 {
        self.inner.read().await.revision_id
    }

    /// Get revision info.
    pub async fn revision_info(&self) -> RevisionInfo {
        let store = self.inner.read().await;
        RevisionInfo {
            revision_id: store.revision_id,
            generated_at: store.generated_at.clone(),
        }
    }

    /// Get a full catalog snapshot.
    pub async fn catalog_snapshot(&self) -> CatalogSnapshot {
        let store = self.inner.read().await;
        CatalogSnapshot {
            revision_id: store.revision_id,
            generated_at: store.generated_at.clone(),
            galleries: store.galleries.clone(),
        }
    }

    // ==================== CATALOG OPERATIONS ====================

    /// List all galleries in catalog order.
    pub async fn list_galleries(&self) -> Vec<Gallery> {
        self.inner.read().await.galleries.clone()
    }

    /// Get a gallery by ID.
    pub async fn get_gallery(&self, id: &str) -> Option<Gallery> {
        self.inner.read().await.gallery(id).cloned()
    }

    /// Create a new gallery (admin, demo-only).
    ///
    /// The identifier is derived from the label; creation is rejected when
    /// the derived id is empty, the passcode is empty, no photos were
    /// supplied, or the id is already taken. The price falls back to
    /// [`DEFAULT_PRICE_PER_PHOTO`] when absent or not a positive finite
    /// number, mirroring the original demo.
    pub async fn create_gallery(
        &self,
        request: &CreateGalleryRequest,
    ) -> Result<Gallery, AppError> {
        let id = gallery_id_from_label(&request.label);
        if id.is_empty() {
            return Err(AppError::Validation(
                "Gallery label must contain at least one alphanumeric character".to_string(),
            ));
        }
        if request.passcode.trim().is_empty() {
            return Err(AppError::Validation("Passcode is required".to_string()));
        }
        if request.photos.is_empty() {
            return Err(AppError::Validation(
                "At least one photo is required".to_string(),
            ));
        }

        let mut store = self.inner.write().await;
        if store.gallery(&id).is_some() {
            return Err(AppError::Conflict(format!("Gallery {} already exists", id)));
        }

        let photos: Vec<Photo> = request
            .photos
            .iter()
            .enumerate()
            .map(|(i, p)| Photo {
                id: format!("{}-{}", id, i),
                url: p.url.clone(),
                thumb: p.thumb.clone().unwrap_or_else(|| p.url.clone()),
                title: p.title.clone(),
                tags: p.tags.clone(),
            })
            .collect();

        let price = request
            .price
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(DEFAULT_PRICE_PER_PHOTO);

        let gallery = Gallery {
            id,
            label: request.label.clone(),
            passcode: request.passcode.clone(),
            price,
            cover_url: photos[0].url.clone(),
            photos,
            created_at: Utc::now().to_rfc3339(),
        };

        store.galleries.push(gallery.clone());
        store.touch();
        tracing::info!(gallery_id = %gallery.id, "Created gallery");

        Ok(gallery)
    }

    /// Update a gallery's per-photo price.
    ///
    /// Cart items store no price, so this retroactively changes the total
    /// of every unchecked-out cart holding photos from this gallery.
    pub async fn update_gallery_price(&self, id: &str, price: f64) -> Result<Gallery, AppError> {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Validation(
                "Price must be a non-negative number".to_string(),
            ));
        }

        let mut store = self.inner.write().await;
        let gallery = store
            .galleries
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Gallery {} not found", id)))?;

        gallery.price = price;
        let gallery = gallery.clone();
        store.touch();

        Ok(gallery)
    }

    // ==================== ACCESS GATE ====================

    /// Open a gallery with a client passcode.
    ///
    /// Exact, case-sensitive equality against every gallery's passcode in
    /// catalog order; first match wins. On success a new session is created
    /// with the matched gallery active. On failure nothing changes.
    pub async fn open_gallery(&self, passcode: &str) -> Result<(Session, Gallery), AppError> {
        let mut store = self.inner.write().await;

        let gallery = store
            .galleries
            .iter()
            .find(|g| g.passcode == passcode)
            .cloned()
            .ok_or(AppError::InvalidPasscode)?;

        let session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            gallery_id: gallery.id.clone(),
            created_at: Utc::now().to_rfc3339(),
        };

        store.sessions.insert(
            session.id.clone(),
            SessionState {
                session: session.clone(),
                cart: Vec::new(),
            },
        );
        store.touch();
        tracing::info!(gallery_id = %gallery.id, session_id = %session.id, "Gallery opened");

        Ok((session, gallery))
    }

    /// Get the active gallery of a session.
    pub async fn session_gallery(&self, session_id: &str) -> Result<Gallery, AppError> {
        let store = self.inner.read().await;
        let state = store
            .sessions
            .get(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

        store
            .gallery(&state.session.gallery_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Gallery {} not found", state.session.gallery_id))
            })
    }

    // ==================== CART OPERATIONS ====================

    /// Get the cart of a session, with the total resolved against current
    /// gallery prices.
    pub async fn cart_view(&self, session_id: &str) -> Result<CartView, AppError> {
        let store = self.inner.read().await;
        let state = store
            .sessions
            .get(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

        Ok(CartView {
            total: store.cart_total(&state.cart),
            items: state.cart.clone(),
        })
    }

    /// Add a photo from the session's active gallery to its cart.
    ///
    /// The item id is deterministic (`{galleryId}_{photoId}`), so adding
    /// the same photo twice collides; the collision is rejected to avoid
    /// duplicate purchases. Without a session (no active gallery) every
    /// cart is left unchanged.
    pub async fn add_cart_item(
        &self,
        session_id: &str,
        photo_id: &str,
    ) -> Result<CartItem, AppError> {
        let mut store = self.inner.write().await;

        let gallery_id = store
            .sessions
            .get(session_id)
            .map(|s| s.session.gallery_id.clone())
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

        let gallery = store
            .gallery(&gallery_id)
            .ok_or_else(|| AppError::NotFound(format!("Gallery {} not found", gallery_id)))?;

        let photo = gallery.photo(photo_id).ok_or_else(|| {
            AppError::NotFound(format!("Photo {} not found in {}", photo_id, gallery_id))
        })?;

        let item = CartItem {
            id: CartItem::derive_id(&gallery.id, &photo.id),
            gallery_id: gallery.id.clone(),
            gallery_label: gallery.label.clone(),
            title: photo.title.clone(),
            thumb: photo.thumb.clone(),
        };

        let state = store
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;
        if state.cart.iter().any(|it| it.id == item.id) {
            return Err(AppError::DuplicateItem(format!(
                "Photo {} is already in the cart",
                photo_id
            )));
        }

        state.cart.push(item.clone());
        store.touch();

        Ok(item)
    }

    /// Remove a cart item by id. Removing an absent id is an idempotent
    /// no-op; the (unchanged) cart is returned either way.
    pub async fn remove_cart_item(
        &self,
        session_id: &str,
        item_id: &str,
    ) -> Result<CartView, AppError> {
        let mut store = self.inner.write().await;

        let state = store
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

        let before = state.cart.len();
        state.cart.retain(|it| it.id != item_id);
        let cart = state.cart.clone();

        if cart.len() != before {
            store.touch();
        }

        Ok(CartView {
            total: store.cart_total(&cart),
            items: cart,
        })
    }

    /// Mock checkout: price the cart at current gallery prices, empty it,
    /// and return the order that would have been placed. A production
    /// build replaces this with a payment-provider session created
    /// server-side.
    pub async fn checkout(&self, session_id: &str) -> Result<OrderSummary, AppError> {
        let mut store = self.inner.write().await;

        let state = store
            .sessions
            .get(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

        if state.cart.is_empty() {
            return Err(AppError::Validation("Cart is empty".to_string()));
        }

        let items = state.cart.clone();
        let total = store.cart_total(&items);

        if let Some(state) = store.sessions.get_mut(session_id) {
            state.cart.clear();
        }
        store.touch();

        let order = OrderSummary {
            order_id: uuid::Uuid::new_v4().to_string(),
            items,
            total,
            placed_at: Utc::now().to_rfc3339(),
        };
        tracing::info!(order_id = %order.order_id, total = order.total, "Mock checkout completed");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPhoto;
    use crate::store::demo_catalog;

    fn seeded() -> Repository {
        Repository::new(demo_catalog())
    }

    fn new_photo(title: &str) -> NewPhoto {
        NewPhoto {
            url: format!("https://example.com/{}.jpg", title),
            thumb: None,
            title: title.to_string(),
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_open_gallery_seed_passcodes() {
        let repo = seeded();

        let (_, huskies) = repo.open_gallery("huskies2025").await.unwrap();
        assert_eq!(huskies.id, "HUSKIES-0907");

        let (_, smith) = repo.open_gallery("smith2025").await.unwrap();
        assert_eq!(smith.id, "SMITH-FAMILY");
    }

    #[tokio::test]
    async fn test_open_gallery_unknown_passcode_changes_nothing() {
        let repo = seeded();
        let before = repo.revision_id().await;

        let err = repo.open_gallery("HUSKIES2025").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPasscode));

        // Case-sensitive, exact match only; failed attempts mutate nothing.
        assert_eq!(repo.revision_id().await, before);
    }

    #[tokio::test]
    async fn test_cart_total_uses_current_gallery_price() {
        let repo = seeded();
        let (session, _) = repo.open_gallery("huskies2025").await.unwrap();

        repo.add_cart_item(&session.id, "p1").await.unwrap();
        repo.add_cart_item(&session.id, "p2").await.unwrap();

        let cart = repo.cart_view(&session.id).await.unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, 50.0);

        // Price changes retroactively affect the unchecked-out cart.
        repo.update_gallery_price("HUSKIES-0907", 40.0)
            .await
            .unwrap();
        let cart = repo.cart_view(&session.id).await.unwrap();
        assert_eq!(cart.total, 80.0);
    }

    #[tokio::test]
    async fn test_add_without_session_changes_nothing() {
        let repo = seeded();
        let before = repo.revision_id().await;

        let err = repo.add_cart_item("no-such-session", "p1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.revision_id().await, before);
    }

    #[tokio::test]
    async fn test_add_duplicate_photo_rejected() {
        let repo = seeded();
        let (session, _) = repo.open_gallery("huskies2025").await.unwrap();

        repo.add_cart_item(&session.id, "p1").await.unwrap();
        let err = repo.add_cart_item(&session.id, "p1").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateItem(_)));

        let cart = repo.cart_view(&session.id).await.unwrap();
        assert_eq!(cart.items.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_item_is_noop() {
        let repo = seeded();
        let (session, _) = repo.open_gallery("huskies2025").await.unwrap();
        repo.add_cart_item(&session.id, "p1").await.unwrap();
        let before = repo.revision_id().await;

        let cart = repo
            .remove_cart_item(&session.id, "HUSKIES-0907_p9")
            .await
            .unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(repo.revision_id().await, before);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let repo = seeded();
        let (session, _) = repo.open_gallery("huskies2025").await.unwrap();
        let item = repo.add_cart_item(&session.id, "p1").await.unwrap();
        assert_eq!(item.id, "HUSKIES-0907_p1");

        let cart = repo.remove_cart_item(&session.id, &item.id).await.unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0.0);
    }

    #[tokio::test]
    async fn test_create_gallery_derives_id() {
        let repo = seeded();

        let gallery = repo
            .create_gallery(&CreateGalleryRequest {
                label: "Johnson Family — Fall 2025".to_string(),
                passcode: "johnson2025".to_string(),
                photos: vec![new_photo("First Look")],
                price: Some(30.0),
            })
            .await
            .unwrap();

        assert_eq!(gallery.id, "JOHNSON-FAMILY-FALL-2025");
        assert_eq!(gallery.price, 30.0);
        assert_eq!(gallery.photos[0].id, "JOHNSON-FAMILY-FALL-2025-0");
        assert_eq!(gallery.cover_url, gallery.photos[0].url);

        let (_, opened) = repo.open_gallery("johnson2025").await.unwrap();
        assert_eq!(opened.id, gallery.id);
    }

    #[tokio::test]
    async fn test_create_gallery_empty_label_rejected() {
        let repo = seeded();
        let count_before = repo.list_galleries().await.len();

        let err = repo
            .create_gallery(&CreateGalleryRequest {
                label: "".to_string(),
                passcode: "x".to_string(),
                photos: vec![new_photo("a")],
                price: Some(30.0),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(repo.list_galleries().await.len(), count_before);
    }

    #[tokio::test]
    async fn test_create_gallery_duplicate_id_conflicts() {
        let repo = seeded();
        let request = CreateGalleryRequest {
            label: "Dup Shoot".to_string(),
            passcode: "dup2025".to_string(),
            photos: vec![new_photo("a")],
            price: None,
        };
        repo.create_gallery(&request).await.unwrap();
        let count_before = repo.list_galleries().await.len();

        // Same label derives the same id; the second create must conflict.
        let err = repo.create_gallery(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list_galleries().await.len(), count_before);
    }

    #[tokio::test]
    async fn test_create_gallery_blank_passcode_rejected() {
        let repo = seeded();

        let err = repo
            .create_gallery(&CreateGalleryRequest {
                label: "Blank Passcode".to_string(),
                passcode: "   ".to_string(),
                photos: vec![new_photo("a")],
                price: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_gallery_price_fallback() {
        let repo = seeded();

        // Missing and zero prices both fall back, as in the original demo.
        let a = repo
            .create_gallery(&CreateGalleryRequest {
                label: "No Price".to_string(),
                passcode: "a".to_string(),
                photos: vec![new_photo("a")],
                price: None,
            })
            .await
            .unwrap();
        assert_eq!(a.price, DEFAULT_PRICE_PER_PHOTO);

        let b = repo
            .create_gallery(&CreateGalleryRequest {
                label: "Zero Price".to_string(),
                passcode: "b".to_string(),
                photos: vec![new_photo("b")],
                price: Some(0.0),
            })
            .await
            .unwrap();
        assert_eq!(b.price, DEFAULT_PRICE_PER_PHOTO);
    }

    #[tokio::test]
    async fn test_duplicate_passcode_resolves_to_first_gallery() {
        let repo = Repository::new(Vec::new());
        for label in ["First Shoot", "Second Shoot"] {
            repo.create_gallery(&CreateGalleryRequest {
                label: label.to_string(),
                passcode: "shared".to_string(),
                photos: vec![new_photo("x")],
                price: None,
            })
            .await
            .unwrap();
        }

        let (_, gallery) = repo.open_gallery("shared").await.unwrap();
        assert_eq!(gallery.id, "FIRST-SHOOT");
    }

    #[tokio::test]
    async fn test_checkout_empties_cart() {
        let repo = seeded();
        let (session, _) = repo.open_gallery("smith2025").await.unwrap();
        repo.add_cart_item(&session.id, "f1").await.unwrap();
        repo.add_cart_item(&session.id, "f2").await.unwrap();

        let order = repo.checkout(&session.id).await.unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total, 60.0);

        let cart = repo.cart_view(&session.id).await.unwrap();
        assert!(cart.items.is_empty());

        // A second checkout has nothing to buy.
        let err = repo.checkout(&session.id).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_total_defaults_missing_gallery_to_zero() {
        let repo = seeded();
        let store_total = {
            let store = repo.inner.read().await;
            store.cart_total(&[CartItem {
                id: "GONE_p1".to_string(),
                gallery_id: "GONE".to_string(),
                gallery_label: "Gone".to_string(),
                title: "Orphan".to_string(),
                thumb: "x".to_string(),
            }])
        };
        assert_eq!(store_total, 0.0);
    }
}
