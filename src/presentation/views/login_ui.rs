//! Sign-in view.

/// Renders the sign-in view.
#[must_use]
pub fn login_ui() -> String {
    concat!(
        r#"<div class="login-page" data-testid="login-page">"#,
        r#"<h2>Employé</h2>"#,
        r#"<form data-testid="form-employee">"#,
        r#"<input data-testid="employee-email-input" type="email" placeholder="johndoe@email.com" required>"#,
        r#"<input data-testid="employee-password-input" type="password" placeholder="******" required>"#,
        r#"<button type="submit" data-testid="employee-login-button">Se connecter</button>"#,
        r#"</form>"#,
        r#"</div>"#,
    )
    .to_string()
}
