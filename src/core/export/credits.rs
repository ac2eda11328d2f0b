use super::PackMetadata;
use crate::core::pack::ModRegistry;

fn escape_html(raw: &str) -> String {
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

/// Render `credits.html`: pack information followed by one section per mod
/// with a selected file.
pub fn build_credits(
    meta: &PackMetadata,
    minecraft_version: Option<&str>,
    loader_version: Option<&str>,
    registry: &ModRegistry,
) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>");
    html.push_str(&escape_html(&meta.name));
    html.push_str("</title></head>\n<body>\n");

    html.push_str(&format!(
        "<h1>Modpack Information</h1>\n<p>Name: {}</p>\n<p>Version: {}</p>\n<p>Author: {}</p>\n\
         <p>Minecraft Version: {}</p>\n<p>Mod Loader: {}</p>\n",
        escape_html(&meta.name),
        escape_html(&meta.version),
        escape_html(&meta.author),
        escape_html(minecraft_version.unwrap_or("none")),
        escape_html(loader_version.unwrap_or("none")),
    ));

    html.push_str("<h1>Mod Credits</h1>\n");
    for m in registry.selected() {
        let Some(file) = m.selected_file() else {
            continue;
        };
        let url = escape_html(&m.website_url);
        html.push_str(&format!(
            "<h2>{}</h2>\n<p>Version: {}</p>\n<p>Author(s): {}</p>\n<p>Website: <a href=\"{}\">{}</a></p>\n",
            escape_html(&m.name),
            escape_html(&file.file_name),
            escape_html(&m.authors.join(", ")),
            url,
            url,
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::testing::{addon, file};
    use crate::core::pack::{Mod, ModFile};

    #[test]
    fn credits_list_selected_mods_only() {
        let mut registry = ModRegistry::new();
        for (id, name) in [(1, "Chisel"), (2, "Botania & Friends")] {
            let mut m = Mod::from_summary(&addon(id, name));
            m.files.push(ModFile::from_summary(
                id,
                &file(id * 10, &format!("{}-1.0.jar", id), &[]),
                "Forge",
            ));
            registry.add(m);
        }
        registry.get_mut(2).unwrap().select_file(20).unwrap();

        let meta = PackMetadata {
            name: "<Pack>".into(),
            version: "2".into(),
            author: "alex".into(),
        };
        let html = build_credits(&meta, Some("1.12.2"), None, &registry);

        assert!(html.contains("<p>Name: &lt;Pack&gt;</p>"));
        assert!(html.contains("<p>Minecraft Version: 1.12.2</p>"));
        assert!(html.contains("<p>Mod Loader: none</p>"));
        assert!(html.contains("<h2>Botania &amp; Friends</h2>"));
        assert!(html.contains("<p>Version: 2-1.0.jar</p>"));
        assert!(html.contains("<p>Author(s): author2</p>"));
        assert!(html.contains("https://mods.example/2"));
        assert!(!html.contains("Chisel"));
    }

    #[test]
    fn every_selected_mod_gets_a_section_in_pack_order() {
        let mut registry = ModRegistry::new();
        for (id, name) in [(3, "Quark"), (1, "Chisel")] {
            let mut m = Mod::from_summary(&addon(id, name));
            m.files.push(ModFile::from_summary(
                id,
                &file(id * 10, &format!("{}-1.0.jar", id), &[]),
                "Forge",
            ));
            m.select_file(id * 10).unwrap();
            registry.add(m);
        }

        let html = build_credits(&PackMetadata::default(), None, None, &registry);

        let quark = html.find("<h2>Quark</h2>").unwrap();
        let chisel = html.find("<h2>Chisel</h2>").unwrap();
        assert!(quark < chisel);
        assert!(html.contains("<p>Minecraft Version: none</p>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn escape_handles_quotes() {
        assert_eq!(escape_html("a\"b'c"), "a&quot;b&#39;c");
    }
}
