//! Static HTML rendering.
//!
//! Emits a single `index.html` carrying the DOM contract the wasm client
//! expects: theme toggle buttons, paginated project lists with their pager
//! placeholders, and a scrollable bio panel. The theme boot script is
//! inlined at the top of `<body>` so a persisted dark preference applies
//! before first paint.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::classify::{self, Classification};
use crate::client::{
    DARK_TOGGLE_ID, DARK_BODY_CLASS, GROUP_ATTR, LIGHT_TOGGLE_ID, PAGE_SIZE_ATTR, PAGER_CLASS,
    PAGINATED_CLASS, SCROLLABLE_CLASS, THEME_STORAGE_KEY,
};
use crate::client::pagination::DEFAULT_PAGE_SIZE;
use crate::config::{Project, ProjectsConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub name: String,
    pub tagline: String,
    pub bio: String,
}

/// Escape text for interpolation into HTML text and attribute positions.
pub fn escape(text: &str) -> String {
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

/// Runs before the rest of the body parses to avoid a flash of the wrong
/// theme. Storage errors are swallowed; the wasm controller re-resolves the
/// theme once it boots.
fn theme_boot_script() -> String {
    format!(
        "(function () {{\n\
         \x20 var theme = null;\n\
         \x20 try {{ theme = localStorage.getItem('{THEME_STORAGE_KEY}'); }} catch (err) {{}}\n\
         \x20 if (theme === 'dark') {{ document.body.classList.add('{DARK_BODY_CLASS}'); }}\n\
         }})();"
    )
}

fn render_card(project: &Project) -> String {
    let artwork = if project.logo.is_empty() {
        format!("<span class=\"badge\">{}</span>", escape(&project.image))
    } else {
        format!(
            "<img class=\"logo\" src=\"{}\" alt=\"\" width=\"64\" height=\"64\">",
            escape(&project.logo)
        )
    };
    let topics: String = project
        .topics
        .iter()
        .map(|topic| format!("<span class=\"topic\">{}</span>", escape(topic)))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "      <li class=\"project-card\">\n\
         \x20       <a class=\"project-link\" href=\"{url}\">{artwork}\n\
         \x20         <div class=\"project-body\">\n\
         \x20           <h3>{name}</h3>\n\
         \x20           <p class=\"description\">{description}</p>\n\
         \x20           <p class=\"meta\">{language} &middot; &#9733; {stars} &middot; &#8916; {forks}</p>\n\
         \x20           <p class=\"topics\">{topics}</p>\n\
         \x20         </div>\n\
         \x20       </a>\n\
         \x20     </li>\n",
        url = escape(&project.url),
        name = escape(&project.name),
        description = escape(&project.description),
        language = escape(&project.language),
        stars = project.stars,
        forks = project.forks,
    )
}

fn render_section(title: &str, group: &str, projects: &[&Project]) -> String {
    let items: String = projects.iter().map(|p| render_card(p)).collect();
    format!(
        "    <section class=\"projects\">\n\
         \x20     <h2>{title}</h2>\n\
         \x20     <ul class=\"project-list {PAGINATED_CLASS}\" {PAGE_SIZE_ATTR}=\"{DEFAULT_PAGE_SIZE}\" {GROUP_ATTR}=\"{group}\">\n\
         {items}\
         \x20     </ul>\n\
         \x20     <nav class=\"{PAGER_CLASS}\" {GROUP_ATTR}=\"{group}\" aria-label=\"{title} pages\"></nav>\n\
         \x20   </section>\n",
        title = escape(title),
    )
}

const STYLESHEET: &str = "\
    :root { color-scheme: light; }\n\
    body { margin: 0; font-family: system-ui, sans-serif; background: #fafafa; color: #1a1a1a; }\n\
    body.dark-mode { color-scheme: dark; background: #161616; color: #e6e6e6; }\n\
    header { padding: 2rem 1.5rem 1rem; max-width: 60rem; margin: 0 auto; }\n\
    main { max-width: 60rem; margin: 0 auto; padding: 0 1.5rem 3rem; }\n\
    .theme-toggles button { cursor: pointer; }\n\
    .theme-toggles button.active { font-weight: bold; text-decoration: underline; }\n\
    .bio.scrollable { max-height: 8rem; overflow-y: auto; position: relative; }\n\
    .bio.can-scroll-up { box-shadow: inset 0 0.5rem 0.5rem -0.5rem rgba(0,0,0,0.4); }\n\
    .bio.can-scroll-down { box-shadow: inset 0 -0.5rem 0.5rem -0.5rem rgba(0,0,0,0.4); }\n\
    .project-list { list-style: none; padding: 0; display: grid; gap: 0.75rem; }\n\
    .project-list li.hidden { display: none; }\n\
    .project-card a { display: flex; gap: 0.75rem; text-decoration: none; color: inherit; }\n\
    .pager button { margin-right: 0.25rem; cursor: pointer; }\n\
    .pager button.active { font-weight: bold; }\n\
    .pager button[disabled] { cursor: default; opacity: 0.5; }\n\
    .topic { font-size: 0.8rem; opacity: 0.75; margin-right: 0.4rem; }\n";

pub fn render_index(meta: &SiteMeta, config: &ProjectsConfig) -> String {
    let mut sections = String::new();
    for (classification, title, group) in [
        (Classification::Project, "Projects", "projects"),
        (Classification::Training, "Training & Practice", "training"),
    ] {
        let group_projects: Vec<&Project> = config
            .projects
            .iter()
            .filter(|p| p.classification() == classification)
            .collect();
        if group_projects.is_empty() {
            continue;
        }
        sections.push_str(&render_section(title, group, &group_projects));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"utf-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <title>{name}</title>\n\
         \x20 <style>\n{STYLESHEET}  </style>\n\
         </head>\n\
         <body>\n\
         \x20 <script>\n{boot}\n  </script>\n\
         \x20 <header>\n\
         \x20   <div class=\"theme-toggles\">\n\
         \x20     <button id=\"{LIGHT_TOGGLE_ID}\" class=\"active\" type=\"button\">Light</button>\n\
         \x20     <button id=\"{DARK_TOGGLE_ID}\" type=\"button\">Dark</button>\n\
         \x20   </div>\n\
         \x20   <h1>{name}</h1>\n\
         \x20   <p class=\"tagline\">{tagline}</p>\n\
         \x20   <div class=\"bio {SCROLLABLE_CLASS}\">{bio}</div>\n\
         \x20 </header>\n\
         \x20 <main>\n\
         {sections}\
         \x20 </main>\n\
         \x20 <script type=\"module\">\n\
         \x20   import init from \"./assets/repofolio.js\";\n\
         \x20   init();\n\
         \x20 </script>\n\
         </body>\n\
         </html>\n",
        name = escape(&meta.name),
        tagline = escape(&meta.tagline),
        bio = escape(&meta.bio),
        boot = theme_boot_script(),
    )
}

/// Small rounded-rect SVG logo: name-derived background color, initials on top.
pub fn logo_svg(name: &str) -> String {
    let initials = classify::initials(name);
    let color = classify::hue_color(name);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"64\" viewBox=\"0 0 64 64\" role=\"img\" aria-label=\"{label}\">\n\
         \x20 <rect width=\"100%\" height=\"100%\" rx=\"10\" fill=\"{color}\" />\n\
         \x20 <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"Inter, system-ui, sans-serif\" font-size=\"24\" fill=\"#ffffff\">{initials}</text>\n\
         </svg>\n",
        label = escape(name),
        initials = escape(&initials),
    )
}

/// Write one SVG logo per project under `assets/images/` and point each
/// project's `logo` at it. A failed write falls back to the emoji badge for
/// that project instead of aborting the render.
pub fn write_logos(projects: &mut [Project], root: &Path) -> Result<()> {
    let images_dir = root.join("assets").join("images");
    fs::create_dir_all(&images_dir)?;
    for project in projects.iter_mut() {
        let file = format!("{}.svg", classify::slug(&project.name));
        match fs::write(images_dir.join(&file), logo_svg(&project.name)) {
            Ok(()) => project.logo = format!("assets/images/{file}"),
            Err(err) => {
                warn!("failed to write logo for {}: {err}", project.name);
                project.logo = String::new();
            }
        }
    }
    Ok(())
}
