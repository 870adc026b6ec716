//! Page rendering
//!
//! The build treats rendering as a collaborator behind [`PageRenderer`]:
//! it receives already-resolved entities and produces markup, nothing
//! more. [`HtmlRenderer`] is the built-in implementation — plain escaped
//! HTML, no templating.

use vestibulando_core::resolve::{CursoPage, InstitutoPage};

/// Rendering collaborator: resolved entities in, markup out
pub trait PageRenderer: Send + Sync {
    /// Render an instituto page (title, description, curso links)
    fn render_instituto(&self, page: &InstitutoPage<'_>, exam: &str) -> String;

    /// Render a curso score page for one exam kind
    fn render_curso(&self, page: &CursoPage<'_>, exam: &str) -> String;
}

/// Built-in renderer emitting minimal, escaped HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl PageRenderer for HtmlRenderer {
    fn render_instituto(&self, page: &InstitutoPage<'_>, exam: &str) -> String {
        let mut cards = String::new();
        for curso in &page.instituto.cursos {
            let href = format!("{}/notas-{exam}.html", escape(&curso.nome));
            cards.push_str(&format!(
                "<li><a href=\"{href}\">{}</a><p>{}</p></li>\n",
                escape(&curso.nome),
                escape(&curso.descricao),
            ));
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\">\
             <title>{sigla} ({campus})</title></head>\n<body>\n\
             <h1>{sigla} ({campus})</h1>\n<p>{descricao}</p>\n<ul>\n{cards}</ul>\n\
             </body>\n</html>\n",
            sigla = escape(&page.instituto.sigla),
            campus = escape(&page.campus.nome),
            descricao = escape(&page.instituto.descricao),
        )
    }

    fn render_curso(&self, page: &CursoPage<'_>, exam: &str) -> String {
        let mut rows = String::new();
        for nota in page.notas {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                nota.ano,
                escape(&nota.modalidade),
                nota.nota_final,
            ));
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\">\
             <title>{curso} ({sigla}) - {exam}</title></head>\n<body>\n\
             <h1>{curso} ({sigla}) - {exam}</h1>\n\
             <table>\n<thead><tr><th>Ano</th><th>Modalidade</th><th>Nota de corte</th></tr></thead>\n\
             <tbody>\n{rows}</tbody>\n</table>\n</body>\n</html>\n",
            curso = escape(&page.curso.nome),
            sigla = escape(&page.instituto.sigla),
            exam = escape(&capitalize(exam)),
        )
    }
}

/// Escape text for use in HTML bodies and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Uppercase the first letter of an exam kind for page titles
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
