use std::path::Path;
use tera::Tera;

/// Loads every `*.html` file in `template_dir`, keyed by file name.
pub fn load_tera(template_dir: &Path) -> Tera {
    let mut tera = Tera::default();
    if !template_dir.exists() {
        tracing::warn!("Template directory {} not found", template_dir.display());
        return tera;
    }

    let entries = match std::fs::read_dir(template_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", template_dir.display(), e);
            return tera;
        }
    };

    let files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().map_or(false, |ext| ext == "html"))
        .filter_map(|p| {
            let name = p.file_name()?.to_str()?.to_string();
            Some((p, Some(name)))
        })
        .collect();

    if let Err(e) = tera.add_template_files(files) {
        tracing::error!("Failed to load templates: {}", e);
    }
    tera
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_html_files_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("form.html"), "<p>{{ greeting }}</p>").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let tera = load_tera(dir.path());
        let names: Vec<_> = tera.get_template_names().collect();
        assert_eq!(names, vec!["form.html"]);

        let mut ctx = tera::Context::new();
        ctx.insert("greeting", "hi");
        assert_eq!(tera.render("form.html", &ctx).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn missing_directory_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let tera = load_tera(&dir.path().join("nope"));
        assert_eq!(tera.get_template_names().count(), 0);
    }
}
