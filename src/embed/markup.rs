//! Embed markup construction.

use super::resolver::Provider;
use super::source::VideoSource;

/// Permission list the YouTube player asks for
const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Permission list the Vimeo player asks for
const VIMEO_ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

/// Render a source to the markup the video modal displays.
///
/// Never fails: an unavailable source renders to an empty string and the
/// caller signals "no video" separately.
pub fn render(source: &VideoSource) -> String {
    match source {
        VideoSource::Remote { url } => match Provider::classify(url) {
            Provider::YouTube { id } => youtube_iframe(&id),
            Provider::Vimeo { id } => vimeo_iframe(&id),
            Provider::Generic { url } => generic_iframe(&url),
        },
        VideoSource::Local { file, preview } => video_tag(file, preview.as_deref()),
        VideoSource::Unavailable => String::new(),
    }
}

fn youtube_iframe(id: &str) -> String {
    format!(
        "<iframe src=\"https://www.youtube.com/embed/{id}\" frameborder=\"0\" \
         allow=\"{YOUTUBE_ALLOW}\" allowfullscreen class=\"video-iframe\" \
         loading=\"lazy\"></iframe>"
    )
}

fn vimeo_iframe(id: &str) -> String {
    format!(
        "<iframe src=\"https://player.vimeo.com/video/{id}\" frameborder=\"0\" \
         allow=\"{VIMEO_ALLOW}\" allowfullscreen class=\"video-iframe\" \
         loading=\"lazy\"></iframe>"
    )
}

fn generic_iframe(url: &str) -> String {
    format!(
        "<iframe src=\"{url}\" frameborder=\"0\" allowfullscreen \
         class=\"video-iframe\" loading=\"lazy\"></iframe>"
    )
}

// The same file path is offered as both mp4 and webm; the player picks
// whichever it can decode.
fn video_tag(file: &str, preview: Option<&str>) -> String {
    let poster = match preview {
        Some(image) => format!(" poster=\"{image}\""),
        None => String::new(),
    };

    format!(
        "<video controls class=\"video-player\"{poster} preload=\"metadata\">\
         <source src=\"{file}\" type=\"video/mp4\">\
         <source src=\"{file}\" type=\"video/webm\">\
         Your browser does not support the video tag.\
         </video>"
    )
}
