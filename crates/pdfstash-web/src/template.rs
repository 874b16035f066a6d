use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../templates/index.html");
const RESULT_HTML: &str = include_str!("../../../templates/result.html");

/// Render the upload form page.
pub fn render_index() -> Html<String> {
    Html(INDEX_HTML.to_string())
}

/// Render the result page with the extracted text (or an error message)
/// substituted into the `{{ texto }}` slot.
pub fn render_result(texto: &str) -> Html<String> {
    Html(RESULT_HTML.replace("{{ texto }}", &escape_html(texto)))
}

/// Minimal HTML escaping for the interpolated slot. The slot carries
/// client-derived text, unlike the template's static remainder.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
