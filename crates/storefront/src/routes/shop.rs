//! Shop page route handler.
//!
//! One page shows everything: category navigation, filter buttons, the
//! product table with quantity controls, the cart summary and, when open, the
//! enquiry form.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use vino_crackers_core::{Category, CategoryFilter, ShopView};

use crate::error::Result;
use crate::filters;
use crate::services::shopper::{take_notice, with_shop};
use crate::state::AppState;

/// Shop page query parameters.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    /// Category slug, or `all`.
    pub category: Option<String>,
}

/// A category link or filter button.
#[derive(Clone)]
pub struct FilterLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl FilterLink {
    fn new(filter: CategoryFilter, active: CategoryFilter) -> Self {
        let label = match filter {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        };
        Self {
            slug: filter.slug(),
            label,
            active: filter == active,
        }
    }
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub view: ShopView,
    /// Filter buttons, "All" first.
    pub filters: Vec<FilterLink>,
    /// Header navigation, one anchor per category.
    pub categories: Vec<FilterLink>,
    /// One-shot notice from the previous action.
    pub notice: Option<String>,
}

impl ShopTemplate {
    fn new(view: ShopView, notice: Option<String>) -> Self {
        let active = view.filter;
        let categories: Vec<FilterLink> = Category::ALL
            .into_iter()
            .map(|category| FilterLink::new(category.into(), active))
            .collect();
        let filters = std::iter::once(FilterLink::new(CategoryFilter::All, active))
            .chain(categories.iter().cloned())
            .collect();

        Self {
            view,
            filters,
            categories,
            notice,
        }
    }
}

/// Display the shop.
///
/// A `category` query parameter selects the filter and is remembered for the
/// rest of the session; unknown slugs show every product.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ShopQuery>,
) -> Result<ShopTemplate> {
    let requested = query.category.as_deref().map(CategoryFilter::parse_or_all);

    let view = with_shop(&session, &state, |shop| {
        if let Some(filter) = requested {
            shop.select_category(filter);
        }
        shop.view()
    })
    .await?;

    let notice = take_notice(&session).await.map(|notice| notice.message());
    Ok(ShopTemplate::new(view, notice))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vino_crackers_core::{Catalog, LogNotifier, MemorySlot, Shop};

    fn view(filter: CategoryFilter) -> ShopView {
        let catalog = Catalog::fireworks();
        let mut shop = Shop::open(&catalog, MemorySlot::new(), LogNotifier);
        shop.select_category(filter);
        shop.view()
    }

    #[test]
    fn test_filter_links_mark_active_filter() {
        let template = ShopTemplate::new(view(CategoryFilter::Only(Category::Rockets)), None);

        assert_eq!(template.filters.len(), Category::ALL.len() + 1);
        assert_eq!(template.filters[0].slug, "all");
        let active: Vec<_> = template.filters.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].slug, "rockets");
    }

    #[test]
    fn test_render_lists_rows_and_notice() {
        let template = ShopTemplate::new(
            view(CategoryFilter::Only(Category::Sparklers)),
            Some("Your cart is empty! Add some crackers first.".to_string()),
        );
        let html = template.render().unwrap();

        assert!(html.contains("10cm Sparklers (Red)"));
        assert!(html.contains("Standard Sparklers"));
        assert!(!html.contains("Rocket Bomb (Packet)"));
        assert!(html.contains("Your cart is empty! Add some crackers first."));
        assert!(html.contains("/?category=gift-boxes#products"));
        assert!(!html.contains("id=\"enquiry\""));
    }
}
