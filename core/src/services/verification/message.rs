//! Verification email content

use super::config::VerificationServiceConfig;

/// Rendered verification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl VerificationEmail {
    /// Render the Spanish verification email carrying `code`
    pub fn render(code: &str, config: &VerificationServiceConfig) -> Self {
        let brand = escape_html(&config.brand_name);
        let code_html = escape_html(code);
        let minutes = config.code_expiration_minutes;

        let subject = format!("Código de verificación - {}", config.brand_name);
        let text_body = format!(
            "Tu código de verificación es: {}. Expira en {} minutos.",
            code, minutes
        );
        let html_body = format!(
            r#"<div style="font-family: Arial, Helvetica, sans-serif; line-height:1.4; color:#111;">
  <p>Hola,</p>
  <p>Tu código de verificación para el sistema de {brand} es:</p>
  <h2 style="letter-spacing:4px; color:#0b63d6;">{code_html}</h2>
  <p>Este código expira en {minutes} minutos.</p>
  <p>Si no solicitaste este código, ignora este correo.</p>
  <hr/>
  <p style="font-size:12px; color:#666;">{brand}</p>
</div>"#
        );

        Self {
            subject,
            text_body,
            html_body,
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
