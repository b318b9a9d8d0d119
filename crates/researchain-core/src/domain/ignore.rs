//! Exclusion list written by `init`.

/// File name of the exclusion list.
pub const EXCLUSION_LIST_FILE: &str = ".gitignore";

/// Image and model-checkpoint patterns kept out of the repository.
pub const EXCLUSION_PATTERNS: [&str; 6] = ["*.png", "*.jpg", "*.jpeg", "*.pt", "*.ckpt", "*.pth"];

/// Render the exclusion list, one pattern per line with a trailing newline.
pub fn render_exclusion_list() -> String {
    let mut content = EXCLUSION_PATTERNS.join("\n");
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact_content() {
        assert_eq!(
            render_exclusion_list(),
            "*.png\n*.jpg\n*.jpeg\n*.pt\n*.ckpt\n*.pth\n"
        );
    }
}
