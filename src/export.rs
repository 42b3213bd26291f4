//! File export of a generated story.
//!
//! Two text renditions of the same content: `story.md` puts the examples
//! section under a markdown heading, `story.txt` drops the heading and keeps
//! plain paragraphs. `diagram.svg` is written when a diagram was rendered.

use std::io;
use std::path::{Path, PathBuf};

use crate::story::StoryResponse;

pub const STORY_TXT: &str = "story.txt";
pub const STORY_MD: &str = "story.md";
pub const DIAGRAM_SVG: &str = "diagram.svg";

const EXAMPLES_HEADING: &str = "Практическое применение";

/// Markdown rendition: the story, then the examples under a `###` heading.
#[must_use]
pub fn markdown(response: &StoryResponse) -> String {
    match &response.examples {
        Some(examples) => format!("{}\n\n### {EXAMPLES_HEADING}\n\n{examples}", response.story),
        None => response.story.clone(),
    }
}

/// Plain-text rendition: story and examples joined by a blank line.
#[must_use]
pub fn plain_text(response: &StoryResponse) -> String {
    match &response.examples {
        Some(examples) => format!("{}\n\n{examples}", response.story),
        None => response.story.clone(),
    }
}

/// Write `story.txt`, `story.md` and (when given) `diagram.svg` into `dir`,
/// creating the directory if needed. Returns the paths written.
///
/// # Errors
///
/// Propagates any filesystem error.
pub fn write_outputs(dir: &Path, response: &StoryResponse, svg: Option<&str>) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let txt = dir.join(STORY_TXT);
    std::fs::write(&txt, plain_text(response))?;
    written.push(txt);

    let md = dir.join(STORY_MD);
    std::fs::write(&md, markdown(response))?;
    written.push(md);

    if let Some(svg) = svg {
        let path = dir.join(DIAGRAM_SVG);
        std::fs::write(&path, svg)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
