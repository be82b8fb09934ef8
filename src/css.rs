#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Lines that wrap embedded stylesheets but are not CSS themselves.
const GUARD_LINES: &[&str] = &["//", "////", "<!--", "&lt;!--", "-->", "--&gt;"];

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Strip comment-guard and `//` separator lines from raw stylesheet text.
///
/// Every kept line is terminated with the platform line ending.
pub fn clean_up_css(css: Option<&str>) -> String {
    let Some(css) = css else {
        return String::new();
    };
    let css = css.trim();
    if css.is_empty() {
        return String::new();
    }

    let mut clean = String::with_capacity(css.len() + LINE_ENDING.len());
    for line in split_lines(css).filter(|l| !GUARD_LINES.contains(&l.trim())) {
        clean.push_str(line);
        clean.push_str(LINE_ENDING);
    }
    clean
}
