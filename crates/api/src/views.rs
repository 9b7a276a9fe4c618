//! Server-side HTML rendering for the two public-facing pages.
//!
//! The site is small enough that pages are composed directly rather than
//! through a template engine. All record fields pass through [`escape`]
//! before interpolation.

use folio_core::flash::{FlashKind, FlashMessage};
use folio_db::models::contact::Contact;
use folio_db::models::project::Project;

/// Escape a string for safe interpolation into HTML text or attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Wrap page content in the shared document shell.
fn page_shell(title: &str, flash: Option<&FlashMessage>, body: &str) -> String {
    let flash_html = match flash {
        Some(flash) => {
            let class = match flash.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            format!(
                "<div class=\"{class}\" role=\"status\">{}</div>\n",
                escape(&flash.text)
            )
        }
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n{flash_html}{body}</body>\n\
         </html>\n",
        title = escape(title),
    )
}

fn project_card(project: &Project) -> String {
    format!(
        "<article class=\"project\">\n\
         <img src=\"/static/{image}\" alt=\"{title}\">\n\
         <h2>{title}</h2>\n\
         <p>{description}</p>\n\
         </article>\n",
        image = escape(&project.image_path),
        title = escape(&project.title),
        description = escape(&project.description),
    )
}

/// Public listing: project grid plus the contact form.
pub fn index_page(projects: &[Project], flash: Option<&FlashMessage>) -> String {
    let mut body = String::from("<main>\n<h1>Portfolio</h1>\n<section class=\"projects\">\n");
    for project in projects {
        body.push_str(&project_card(project));
    }
    body.push_str(
        "</section>\n\
         <section class=\"contact\">\n\
         <h2>Get in touch</h2>\n\
         <form method=\"post\" action=\"/submit_contact\">\n\
         <input name=\"name\" placeholder=\"Name\" required>\n\
         <input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n\
         <textarea name=\"message\" placeholder=\"Message\" required></textarea>\n\
         <button type=\"submit\">Send</button>\n\
         </form>\n\
         </section>\n\
         </main>\n",
    );
    page_shell("Portfolio", flash, &body)
}

/// Admin dashboard: projects with delete controls, the upload form, and
/// contacts newest-first.
pub fn admin_page(
    projects: &[Project],
    contacts: &[Contact],
    flash: Option<&FlashMessage>,
) -> String {
    let mut body = String::from("<main>\n<h1>Admin dashboard</h1>\n");

    body.push_str("<section class=\"admin-projects\">\n<h2>Projects</h2>\n<ul>\n");
    for project in projects {
        body.push_str(&format!(
            "<li>{title} <a href=\"/admin/delete_project/{id}\" class=\"delete\">delete</a></li>\n",
            title = escape(&project.title),
            id = project.id,
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(
        "<h2>Add project</h2>\n\
         <form method=\"post\" action=\"/admin/projects\" enctype=\"multipart/form-data\">\n\
         <input name=\"title\" placeholder=\"Title\" required>\n\
         <textarea name=\"description\" placeholder=\"Description\" required></textarea>\n\
         <input name=\"image\" type=\"file\" accept=\"image/*\" required>\n\
         <button type=\"submit\">Upload</button>\n\
         </form>\n\
         </section>\n",
    );

    body.push_str("<section class=\"admin-contacts\">\n<h2>Contacts</h2>\n<table>\n");
    body.push_str("<tr><th>When</th><th>Name</th><th>Email</th><th>Message</th></tr>\n");
    for contact in contacts {
        body.push_str(&format!(
            "<tr><td>{when}</td><td>{name}</td><td>{email}</td><td>{message}</td></tr>\n",
            when = contact.created_at.format("%Y-%m-%d %H:%M"),
            name = escape(&contact.name),
            email = escape(&contact.email),
            message = escape(&contact.message),
        ));
    }
    body.push_str("</table>\n</section>\n</main>\n");

    page_shell("Admin dashboard", flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project(title: &str) -> Project {
        Project {
            id: 1,
            title: title.into(),
            description: "desc".into(),
            image_path: "uploads/x.png".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape("<script>\"&'</script>"),
            "&lt;script&gt;&quot;&amp;&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn index_escapes_project_fields() {
        let html = index_page(&[project("<b>Bold</b>")], None);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn index_renders_flash() {
        let flash = FlashMessage::error("something broke");
        let html = index_page(&[], Some(&flash));
        assert!(html.contains("flash-error"));
        assert!(html.contains("something broke"));
    }

    #[test]
    fn admin_lists_delete_links() {
        let html = admin_page(&[project("P")], &[], None);
        assert!(html.contains("/admin/delete_project/1"));
        assert!(html.contains("multipart/form-data"));
    }
}
