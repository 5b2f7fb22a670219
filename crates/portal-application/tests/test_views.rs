use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use portal_application::{
    AppContext, AuthUseCase, DirectoryView, ListingView, RegistrationView, SummaryView,
    ViewStatus, load_profile,
};
use portal_application::protected::enter_protected;
use portal_core::account::{Account, AccountProfile, Address, DirectoryQuery, Geo, SortOrder};
use portal_core::aggregate::{ChartShape, ChartSpec};
use portal_core::config::PortalConfig;
use portal_core::content::{ContentItem, Reaction};
use portal_core::identity::{IdentityStore, SessionIdentity, StoredIdentity};
use portal_core::navigation::Route;
use portal_core::provider::{ACCOUNTS, ITEMS, REACTIONS};
use portal_infrastructure::{InMemoryContentProvider, InMemoryIdentityStore};

fn account(id: i64, name: &str, handle: &str, email: &str) -> Account {
    Account {
        id,
        display_name: name.to_string(),
        login_handle: handle.to_string(),
        email: email.to_string(),
    }
}

fn item(id: i64, owner_id: i64, title: &str, body: &str) -> ContentItem {
    ContentItem {
        id,
        owner_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn reaction(id: i64, parent_item_id: i64) -> Reaction {
    Reaction {
        id,
        parent_item_id,
        author_name: format!("commenter {}", id),
        author_email: format!("c{}@example.com", id),
        body: "nice".to_string(),
    }
}

fn provider() -> InMemoryContentProvider {
    let accounts = vec![
        account(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
        account(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
    ];
    let profile = AccountProfile {
        account: accounts[0].clone(),
        phone: "1-770-736-8031".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            city: "Gwenborough".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
    };
    let items = vec![
        item(1, 1, "sunt aut facere", "quia et suscipit"),
        item(2, 1, "qui est esse", "est rerum tempore"),
        item(3, 2, "ea molestias", "et iusto sed"),
    ];
    let reactions = vec![reaction(1, 1), reaction(2, 1), reaction(3, 2), reaction(4, 3)];

    InMemoryContentProvider::new(accounts, items, reactions).with_profiles(vec![profile])
}

struct Harness {
    ctx: AppContext,
    provider: Arc<InMemoryContentProvider>,
    store: Arc<InMemoryIdentityStore>,
}

fn harness() -> Harness {
    harness_with(provider())
}

fn harness_with(provider: InMemoryContentProvider) -> Harness {
    let provider = Arc::new(provider);
    let store = Arc::new(InMemoryIdentityStore::new());
    let ctx = AppContext::new(&PortalConfig::default(), provider.clone(), store.clone());
    Harness {
        ctx,
        provider,
        store,
    }
}

async fn login_as(h: &Harness, email: &str, password: &str) {
    AuthUseCase::new(h.ctx.clone())
        .login(email, password)
        .await
        .unwrap();
}

// ============================================================================
// Login / logout
// ============================================================================

#[tokio::test]
async fn test_user_login_writes_identity_and_opens_listing() {
    let h = harness();
    login_as(&h, "sincere@april.biz", "Bret").await;

    let stored = h.store.load().unwrap().unwrap();
    assert_eq!(stored.role.as_deref(), Some("user"));
    assert_eq!(stored.user_id.as_deref(), Some("1"));
    assert_eq!(stored.display_name(), Some("Leanne Graham"));
    assert_eq!(h.ctx.navigator.current(), Route::Posts);
}

#[tokio::test]
async fn test_failed_login_keeps_prior_identity() {
    let h = harness();
    login_as(&h, "admin@admin.com", "admin123").await;
    let auth = AuthUseCase::new(h.ctx.clone());

    let err = auth.login("Sincere@april.biz", "Antonette").await.unwrap_err();
    assert!(err.is_invalid_credentials());
    assert_eq!(
        err.user_message(),
        "Invalid credentials. Email must match a user and password must be the corresponding username."
    );
    assert_eq!(
        h.store.load().unwrap().unwrap().identity(),
        Some(SessionIdentity::Admin)
    );
}

#[tokio::test]
async fn test_directory_outage_is_reported_as_retryable() {
    let h = harness();
    h.provider.set_failing(true);

    let err = AuthUseCase::new(h.ctx.clone())
        .login("Sincere@april.biz", "Bret")
        .await
        .unwrap_err();
    assert!(err.is_directory_unavailable());
    assert_eq!(err.user_message(), "Login failed. Please try again.");

    // The admin pair still works without the directory.
    login_as(&h, "admin@admin.com", "admin123").await;
}

#[tokio::test]
async fn test_logout_from_listing_erases_identity() {
    let h = harness();
    login_as(&h, "Shanna@melissa.tv", "Antonette").await;

    let view = ListingView::enter(h.ctx.clone()).await;
    assert_eq!(view.status(), ViewStatus::Ready);
    view.logout().unwrap();

    assert!(h.store.load().unwrap().is_none());
    assert_eq!(h.ctx.navigator.current(), Route::Login);

    // Back-navigation cannot observe the stale identity.
    let view = ListingView::enter(h.ctx.clone()).await;
    assert!(view.is_unauthorized());
}

// ============================================================================
// Guard denial
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_denied_listing_is_unauthorized_without_fetching() {
    let h = harness();

    let mut view = ListingView::enter(h.ctx.clone()).await;
    assert!(view.is_unauthorized());
    assert_eq!(view.message(), Some("Unauthorized"));
    assert!(view.items().is_empty());
    assert_eq!(h.provider.calls(), 0);
    assert_eq!(h.ctx.navigator.current(), Route::Posts);

    let started = tokio::time::Instant::now();
    let redirect = view.take_redirect().unwrap();
    assert!(redirect.fired().await);
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(h.ctx.navigator.current(), Route::Login);
    assert_eq!(h.provider.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_identity_is_denied() {
    let h = harness();
    h.store
        .save(&StoredIdentity {
            role: Some("user".to_string()),
            user_id: None,
            user_name: Some("Leanne Graham".to_string()),
        })
        .unwrap();

    let view = SummaryView::enter(&h.ctx).await;
    assert!(view.is_unauthorized());
    assert!(view.chart().unwrap_err().is_unauthorized());
    assert_eq!(h.provider.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_redirect_is_noop_after_navigating_away() {
    let h = harness();

    let mut view = SummaryView::enter(&h.ctx).await;
    let redirect = view.take_redirect().unwrap();
    let _users = DirectoryView::enter(&h.ctx).await;

    assert!(!redirect.fired().await);
    assert_eq!(h.ctx.navigator.current(), Route::Users);
}

#[tokio::test(start_paused = true)]
async fn test_tearing_down_the_view_cancels_the_redirect() {
    let h = harness();

    let view = ListingView::enter(h.ctx.clone()).await;
    assert!(view.is_unauthorized());
    drop(view);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(h.ctx.navigator.current(), Route::Posts);
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_user_sees_only_own_posts_and_their_comments() {
    let h = harness();
    login_as(&h, "Sincere@april.biz", "Bret").await;

    let mut view = ListingView::enter(h.ctx.clone()).await;
    let ids: Vec<i64> = view.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(view.reactions_for(1).len(), 2);
    assert!(view.reactions_for(3).is_empty());

    // Search never reaches outside the scope.
    assert!(view.search("molestias").is_empty());
    assert_eq!(view.search("RERUM").len(), 1);

    assert!(view.toggle(1));
    assert!(view.is_expanded(1));
    assert!(!view.toggle(1));
    assert!(!view.is_expanded(1));

    assert!(view.delete(1).unwrap_err().to_string().contains("Forbidden"));
    assert_eq!(view.items().len(), 2);
}

#[tokio::test]
async fn test_admin_sees_everything_and_deletes_idempotently() {
    let h = harness();
    login_as(&h, "admin@admin.com", "admin123").await;

    let mut view = ListingView::enter(h.ctx.clone()).await;
    assert_eq!(view.items().len(), 3);
    assert_eq!(h.provider.calls_for(ITEMS), 1);
    assert_eq!(h.provider.calls_for(REACTIONS), 1);

    assert!(view.delete(3).unwrap());
    assert!(!view.delete(3).unwrap());
    assert!(!view.delete(42).unwrap());
    assert_eq!(view.items().len(), 2);
    assert!(view.reactions_for(3).is_empty());
}

#[tokio::test]
async fn test_local_items_are_prepended_with_negative_ids() {
    let h = harness();
    login_as(&h, "Shanna@melissa.tv", "Antonette").await;

    let mut view = ListingView::enter(h.ctx.clone()).await;
    assert_eq!(view.items().len(), 1);

    assert_eq!(view.add_local("  ", "body"), None);
    assert_eq!(view.add_local("title", ""), None);

    assert_eq!(view.add_local("Draft", "first"), Some(-1));
    assert_eq!(view.add_local("Draft", "second"), Some(-2));

    let items = view.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, -2);
    assert_eq!(items[0].owner_id, 2);
    assert_eq!(view.search("draft").len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_renders_empty_listing_with_message() {
    let h = harness();
    login_as(&h, "admin@admin.com", "admin123").await;
    h.provider.fail_resource(REACTIONS);

    let view = ListingView::enter(h.ctx.clone()).await;
    assert_eq!(view.status(), ViewStatus::Ready);
    assert!(view.items().is_empty());
    assert_eq!(
        view.message(),
        Some("Could not load comments. Showing an empty list.")
    );
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_admin_dashboard_counts_everything() {
    let h = harness();
    login_as(&h, "admin@admin.com", "admin123").await;

    let mut view = SummaryView::enter(&h.ctx).await;
    let model = view.model().unwrap();
    assert_eq!(model.counts(), vec![2, 3, 4]);
    assert_eq!(model.percentages(), vec![22.2, 33.3, 44.4]);
    assert_eq!(h.provider.calls_for(ACCOUNTS), 1);

    let ChartSpec::PartToWhole { slices, total } = view.chart().unwrap() else {
        panic!("donut is the default shape");
    };
    assert_eq!(total, 9);
    assert_eq!(slices[2].tooltip, "4 (44.4%)");

    view.set_shape(ChartShape::Column);
    assert_eq!(view.chart().unwrap().shape(), ChartShape::Column);
    // Switching shape does not refetch.
    assert_eq!(h.provider.calls(), 3);
}

#[tokio::test]
async fn test_user_dashboard_counts_own_scope() {
    let h = harness();
    login_as(&h, "Sincere@april.biz", "Bret").await;

    let view = SummaryView::enter(&h.ctx).await;
    let model = view.model().unwrap();
    assert_eq!(model.labels(), vec!["Users", "Posts", "Comments"]);
    assert_eq!(model.counts(), vec![1, 2, 3]);
    assert_eq!(model.percentages(), vec![16.7, 33.3, 50.0]);
}

#[tokio::test]
async fn test_dashboard_never_renders_a_partial_aggregate() {
    let h = harness();
    login_as(&h, "admin@admin.com", "admin123").await;
    h.provider.fail_resource(ITEMS);

    let view = SummaryView::enter(&h.ctx).await;
    assert_eq!(view.status(), ViewStatus::Ready);
    assert!(view.model().is_none());
    assert!(view.chart().unwrap_err().is_fetch_failed());
    assert_eq!(
        view.message(),
        Some("Could not load posts. The dashboard is unavailable.")
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "not a guarded route")]
fn test_entering_a_public_route_through_the_guard_is_a_bug() {
    let h = harness();
    enter_protected(&h.ctx, Route::Users);
}

#[tokio::test]
async fn test_dashboard_with_empty_provider_has_zero_percentages() {
    let h = harness_with(InMemoryContentProvider::new(Vec::new(), Vec::new(), Vec::new()));
    login_as(&h, "admin@admin.com", "admin123").await;

    let view = SummaryView::enter(&h.ctx).await;
    let model = view.model().unwrap();
    assert_eq!(model.total, 0);
    assert_eq!(model.percentages(), vec![0.0, 0.0, 0.0]);
}

// ============================================================================
// Directory and registration
// ============================================================================

#[tokio::test]
async fn test_directory_search_and_sort() {
    let h = harness();
    let view = DirectoryView::enter(&h.ctx).await;
    assert_eq!(h.ctx.navigator.current(), Route::Users);

    let names: Vec<&str> = view
        .list(&DirectoryQuery::new("", SortOrder::Desc))
        .iter()
        .map(|a| a.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Leanne Graham", "Ervin Howell"]);

    let found = view.list(&DirectoryQuery::new("antON", SortOrder::Asc));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);
}

#[tokio::test]
async fn test_profile_lookup() {
    let h = harness();

    let profile = load_profile(&h.ctx, 1).await.unwrap();
    assert_eq!(profile.address.city, "Gwenborough");
    assert_eq!(h.ctx.navigator.current(), Route::UserProfile(1));

    let err = load_profile(&h.ctx, 99).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_registration_confirms_and_resets() {
    let h = harness();
    let mut view = RegistrationView::enter(&h.ctx);
    assert_eq!(h.ctx.navigator.current(), Route::Register);

    view.form.first_name = "juan".to_string();
    assert!(view.submit(Utc::now()).is_err());
    assert!(view.error_for("firstName").is_some());
    assert_eq!(view.error_for("email"), Some("Email cannot be empty"));

    view.form.first_name = "Juan".to_string();
    view.form.last_name = "Dela Cruz".to_string();
    view.form.email = "juan123@gmail.com".to_string();
    view.form.phone = "09171234567".to_string();
    view.form.coordinates = "13.3603,123.7104".to_string();
    assert!(view.map_preview_link().is_some());

    let now = Utc::now();
    view.submit(now).unwrap();
    assert!(view.errors().is_empty());
    assert!(view.form.first_name.is_empty());
    assert_eq!(
        view.confirmation_at(now),
        Some("Registration Successful! Welcome to our platform.")
    );
    assert_eq!(view.confirmation_at(now + chrono::Duration::seconds(6)), None);
}
