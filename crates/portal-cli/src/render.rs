//! HTML rendering for the search page.
//!
//! A single right-to-left page carries the search form and, after a
//! submission, either the student's record or one user-facing message.
//! Every interpolated value goes through [`escape_html`].

use portal_model::{LookupError, StudentRecord};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>نتيجة الاختبار النهائي</title>
<style>
body { font-family: Tahoma, Arial, sans-serif; background: #f4f6f9; margin: 0; padding: 2rem; }
main { max-width: 640px; margin: 0 auto; background: #fff; border-radius: 12px; padding: 2rem; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
h1 { text-align: center; color: #1f3c88; }
form { display: flex; flex-direction: column; gap: 0.75rem; }
input, select, button { font-size: 1rem; padding: 0.6rem; border-radius: 8px; border: 1px solid #ccd; }
button { background: #1f3c88; color: #fff; border: none; cursor: pointer; }
table { width: 100%; border-collapse: collapse; margin-top: 1.5rem; }
th, td { padding: 0.6rem; border-bottom: 1px solid #eee; text-align: right; }
th { color: #555; width: 40%; }
.message { margin-top: 1.5rem; padding: 1rem; border-radius: 8px; background: #fdecea; color: #a12622; text-align: center; }
</style>
</head>
<body>
<main>
<h1>نتيجة الاختبار النهائي</h1>
"#;

const PAGE_TAIL: &str = "</main>\n</body>\n</html>\n";

/// What the page shows under the form.
pub enum Outcome<'a> {
    /// First visit: the form alone.
    Blank,
    Found(&'a StudentRecord),
    Failed(&'a LookupError),
}

/// Renders the full page.
///
/// `mode` and `query` refill the form so the user can correct a typo.
pub fn render_page(mode: &str, query: &str, outcome: &Outcome<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(PAGE_HEAD);
    push_form(&mut html, mode, query);
    match outcome {
        Outcome::Blank => {}
        Outcome::Found(record) => push_record(&mut html, record),
        Outcome::Failed(err) => {
            html.push_str("<p class=\"message\">");
            html.push_str(&escape_html(err.user_message()));
            html.push_str("</p>\n");
        }
    }
    html.push_str(PAGE_TAIL);
    html
}

fn push_form(html: &mut String, mode: &str, query: &str) {
    let selected = |value: &str| if mode == value { " selected" } else { "" };
    html.push_str("<form method=\"post\" action=\"/result\">\n");
    html.push_str("<select name=\"search_type\">\n");
    html.push_str(&format!(
        "<option value=\"id\"{}>البحث برقم المسلسل</option>\n",
        selected("id")
    ));
    html.push_str(&format!(
        "<option value=\"phone\"{}>البحث برقم الهاتف</option>\n",
        selected("phone")
    ));
    html.push_str("</select>\n");
    html.push_str(&format!(
        "<input type=\"text\" name=\"search_value\" value=\"{}\" placeholder=\"أدخل الرقم\" required>\n",
        escape_html(query)
    ));
    html.push_str("<button type=\"submit\">عرض النتيجة</button>\n");
    html.push_str("</form>\n");
}

fn push_record(html: &mut String, record: &StudentRecord) {
    html.push_str("<table>\n");
    for (label, value) in record.display_fields() {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            escape_html(label),
            escape_html(&value)
        ));
    }
    html.push_str("</table>\n");
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    use portal_model::{InvalidQueryReason, StudentId};

    fn record() -> StudentRecord {
        StudentRecord {
            id: StudentId::new(3),
            name: Some("<b>سارة</b>".to_string()),
            name_english: None,
            phone: "01112223333".to_string(),
            university: Some("جامعة القاهرة".to_string()),
            year: "الثانية".to_string(),
            governorate: None,
            score: Some(17.5),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("محمد"), "محمد");
    }

    #[test]
    fn found_record_lists_every_field_escaped() {
        let record = record();
        let html = render_page("id", "3", &Outcome::Found(&record));
        assert!(html.contains("&lt;b&gt;سارة&lt;/b&gt;"));
        assert!(!html.contains("<b>سارة"));
        assert!(html.contains("<td>17.5</td>"));
        assert_eq!(html.matches("<tr>").count(), 8);
    }

    #[test]
    fn failure_shows_only_the_user_message() {
        let err = LookupError::InvalidQuery {
            query: "<script>".to_string(),
            reason: InvalidQueryReason::NoDigits,
        };
        let html = render_page("phone", "<script>", &Outcome::Failed(&err));
        assert!(html.contains(err.user_message()));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("no digits"));
        assert!(html.contains("<option value=\"phone\" selected>"));
    }
}
