//! The SvelteKit + Bun template compiled into the binary

macro_rules! template_file {
    ($path:literal) => {
        (
            $path,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/sveltekit-bun/",
                $path
            )),
        )
    };
}

/// `(relative path, contents)` for every file of the template, descriptor included
pub const FILES: &[(&str, &str)] = &[
    template_file!("template.yaml"),
    template_file!("gitignore"),
    template_file!(".editorconfig"),
    template_file!("svelte.config.js"),
    template_file!("vite.config.ts"),
    template_file!("src/app.d.ts"),
    template_file!("src/app.html"),
    template_file!("src/routes/+page.svelte"),
    template_file!("static/favicon.svg"),
];

/// Contents of an embedded file
pub fn file(path: &str) -> Option<&'static str> {
    FILES
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, contents)| *contents)
}
