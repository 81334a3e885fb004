// Catalog construction: normalize the provider's format list into the
// resolution menu, and resolve the audio counterpart.

use std::cmp::Reverse;

use super::models::{Rendition, ResolutionOption};

pub struct CatalogBuilder;

impl CatalogBuilder {
    /// Build the resolution catalog from raw renditions.
    ///
    /// Keeps adaptive video-only mp4 renditions, labels them by height,
    /// deduplicates by label (first encountered wins) and orders by numeric
    /// height descending. The sort is stable, so ties keep discovery order;
    /// labels without a leading integer are treated as height 0 and end up
    /// last. Zero usable renditions yield an empty catalog, not an error.
    pub fn build(renditions: &[Rendition]) -> Vec<ResolutionOption> {
        let mut options: Vec<ResolutionOption> = Vec::new();

        for r in renditions
            .iter()
            .filter(|r| r.is_video_only() && r.is_mp4_container())
        {
            let label = match r.resolution_label() {
                Some(label) => label,
                None => continue,
            };
            if options.iter().any(|o| o.label == label) {
                continue;
            }
            options.push(ResolutionOption {
                label,
                fps: r.fps.map(|f| f.round() as u32),
                filesize: r.effective_size(),
                handle: r.format_id.clone(),
            });
        }

        sort_by_height(&mut options);
        options
    }

    /// The audio-only mp4-container rendition with the highest bitrate.
    pub fn best_audio(renditions: &[Rendition]) -> Option<&Rendition> {
        renditions
            .iter()
            .filter(|r| r.is_audio_only() && r.is_mp4_container())
            .max_by(|a, b| {
                a.abr
                    .unwrap_or(0.0)
                    .partial_cmp(&b.abr.unwrap_or(0.0))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Stable descending order by parsed label height; ties and unparsable
/// labels keep their relative positions.
fn sort_by_height(options: &mut [ResolutionOption]) {
    options.sort_by_key(|o| Reverse(parse_label_height(&o.label)));
}

/// Leading integer of a resolution label ("1080p" -> 1080, "1080p60" -> 1080).
/// Labels that do not start with a digit parse as 0.
pub fn parse_label_height(label: &str) -> u32 {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(height: u32, format_id: &str) -> Rendition {
        Rendition {
            format_id: format_id.to_string(),
            ext: "mp4".to_string(),
            height: Some(height),
            fps: Some(30.0),
            filesize: Some(height as u64 * 1_000_000),
            vcodec: Some("avc1.4d401f".to_string()),
            acodec: Some("none".to_string()),
            ..Default::default()
        }
    }

    fn audio(abr: f64, format_id: &str) -> Rendition {
        Rendition {
            format_id: format_id.to_string(),
            ext: "m4a".to_string(),
            abr: Some(abr),
            vcodec: Some("none".to_string()),
            acodec: Some("mp4a.40.2".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn dedupes_by_label_and_sorts_descending() {
        let renditions = vec![
            video(720, "136"),
            video(1080, "137"),
            video(1080, "399"), // same height, different encoding: dropped
            video(480, "135"),
        ];

        let catalog = CatalogBuilder::build(&renditions);
        let labels: Vec<&str> = catalog.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["1080p", "720p", "480p"]);
        // first-encountered 1080p kept
        assert_eq!(catalog[0].handle, "137");
    }

    #[test]
    fn empty_renditions_yield_empty_catalog() {
        assert!(CatalogBuilder::build(&[]).is_empty());
    }

    #[test]
    fn skips_non_mp4_and_non_adaptive_renditions() {
        let mut webm = video(1080, "248");
        webm.ext = "webm".to_string();
        let mut muxed = video(720, "22");
        muxed.acodec = Some("mp4a.40.2".to_string());

        let catalog = CatalogBuilder::build(&[webm, muxed, audio(128.0, "140")]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn skips_renditions_without_height() {
        let mut no_height = video(0, "000");
        no_height.height = None;

        let catalog = CatalogBuilder::build(&[no_height, video(360, "134")]);
        let labels: Vec<&str> = catalog.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["360p"]);
    }

    #[test]
    fn unparsable_labels_sort_last() {
        assert_eq!(parse_label_height("1080p"), 1080);
        assert_eq!(parse_label_height("1080p60"), 1080);
        assert_eq!(parse_label_height("medium"), 0);
        assert_eq!(parse_label_height(""), 0);
    }

    #[test]
    fn sort_is_stable_and_puts_unparsable_labels_last() {
        let option = |label: &str| ResolutionOption {
            label: label.to_string(),
            fps: None,
            filesize: None,
            handle: label.to_string(),
        };
        let mut options = vec![
            option("720p"),
            option("source"),
            option("1080p"),
            option("1080p60"),
            option("medium"),
        ];

        sort_by_height(&mut options);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        // 1080p ties keep discovery order; height-0 labels trail in order
        assert_eq!(labels, vec!["1080p", "1080p60", "720p", "source", "medium"]);
    }

    #[test]
    fn best_audio_picks_highest_bitrate_mp4() {
        let mut opus = audio(160.0, "251");
        opus.ext = "webm".to_string();
        opus.acodec = Some("opus".to_string());

        let renditions = vec![audio(48.0, "139"), audio(128.0, "140"), opus];
        let best = CatalogBuilder::best_audio(&renditions).unwrap();
        assert_eq!(best.format_id, "140");
    }

    #[test]
    fn best_audio_none_when_no_audio_renditions() {
        assert!(CatalogBuilder::best_audio(&[video(720, "136")]).is_none());
    }
}
