use tera::{Context, Tera};

/// Templates compiled into the binary, registered together so `{% extends %}`
/// resolves.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("landing.html", include_str!("../templates/landing.html")),
    ("chat.html", include_str!("../templates/chat.html")),
    ("docqa.html", include_str!("../templates/docqa.html")),
    ("comingsoon.html", include_str!("../templates/comingsoon.html")),
];

/// Parse every page template.
pub fn load_pages() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}

/// Render one page with the shared context plus a page title.
pub fn render_page(
    tera: &Tera,
    template_name: &str,
    title: &str,
    model_id: &str,
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("model_id", model_id);
    tera.render(template_name, &context)
}
