//! Side navigation shared by employee views.

use crate::presentation::router::Route;

const ACTIVE_CLASS: &str = "active-icon";

fn icon(id: &str, test_id: &str, active: bool, title: &str) -> String {
    let class = if active {
        format!(r#" class="{ACTIVE_CLASS}""#)
    } else {
        String::new()
    };
    format!(r#"<div id="{id}" data-testid="{test_id}"{class} title="{title}"></div>"#)
}

/// Renders the navigation bar with the icon of `active` highlighted.
#[must_use]
pub fn vertical_layout(active: Route) -> String {
    format!(
        r#"<div class="vertical-navbar"><div class="layout-title">Billed</div>{}{}<div id="layout-disconnect" data-testid="layout-disconnect" title="Se déconnecter"></div></div>"#,
        icon("layout-icon1", "icon-window", active == Route::Bills, "Mes notes de frais"),
        icon("layout-icon2", "icon-mail", active == Route::NewBill, "Nouvelle note de frais"),
    )
}
