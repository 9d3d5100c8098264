//! Plain-text rendering of view updates for the terminal front-end

use crate::session::ViewUpdate;
use crate::view::{Detail, DetailMedia, GalleryItem};

pub fn render_update(update: &ViewUpdate) -> String {
    match update {
        ViewUpdate::Alert(msg) => format!("! {msg}\n"),
        ViewUpdate::Loading => "Loading images...\n".to_string(),
        ViewUpdate::Gallery(items) => format_gallery(items),
        ViewUpdate::NoResults => "No images found for the selected date range.\n".to_string(),
        ViewUpdate::Error(msg) => format!("{msg}\n"),
        ViewUpdate::DetailOpened(detail) => format_detail(detail),
        ViewUpdate::DetailClosed => "(closed)\n".to_string(),
    }
}

pub fn format_gallery(items: &[GalleryItem]) -> String {
    let mut output = String::new();

    for item in items {
        let marker = if item.is_video { "▶" } else { " " };
        output.push_str(&format!(
            "{} {}  {} ({})\n",
            marker, item.date, item.title, item.display_date
        ));
        output.push_str(&format!("    {}\n", item.thumbnail_url));
    }

    output.push_str(&format!(
        "{} {}\n",
        items.len(),
        if items.len() == 1 { "image" } else { "images" }
    ));
    output
}

pub fn format_detail(detail: &Detail) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n{}\n\n", detail.title, detail.display_date));
    match &detail.media {
        DetailMedia::Image { src } => output.push_str(&format!("Image: {src}\n")),
        DetailMedia::Video { embed_url } => output.push_str(&format!("Video: {embed_url}\n")),
    }
    output.push_str(&format!("\n{}\n", detail.explanation.trim()));

    if let Some(attribution) = &detail.attribution {
        output.push_str(&format!("\n{attribution}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(day: u32, is_video: bool) -> GalleryItem {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        GalleryItem {
            date,
            title: format!("Item {day}"),
            display_date: crate::view::format_date(date),
            thumbnail_url: format!("https://example.com/{day}.jpg"),
            is_video,
        }
    }

    #[test]
    fn gallery_lists_items_with_video_marker() {
        let output = format_gallery(&[item(15, true), item(1, false)]);

        assert!(output.contains("▶ 2024-01-15  Item 15 (January 15, 2024)"));
        assert!(output.contains("  2024-01-01  Item 1 (January 1, 2024)"));
        assert!(output.contains("https://example.com/15.jpg"));
        assert!(output.ends_with("2 images\n"));
    }

    #[test]
    fn gallery_singular_count() {
        assert!(format_gallery(&[item(3, false)]).ends_with("1 image\n"));
    }

    #[test]
    fn detail_includes_attribution_only_when_present() {
        let mut detail = Detail {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            title: "Orion".to_string(),
            display_date: "January 1, 2024".to_string(),
            explanation: "  Stars being born.\n".to_string(),
            media: DetailMedia::Video {
                embed_url: "https://www.youtube.com/embed/x".to_string(),
            },
            attribution: None,
        };

        let output = format_detail(&detail);
        assert!(output.starts_with("Orion\nJanuary 1, 2024\n"));
        assert!(output.contains("Video: https://www.youtube.com/embed/x"));
        assert!(output.contains("\nStars being born.\n"));
        assert!(!output.contains('©'));

        detail.attribution = Some("© Jane".to_string());
        assert!(format_detail(&detail).ends_with("\n© Jane\n"));
    }

    #[test]
    fn states_render_distinctly() {
        assert_eq!(render_update(&ViewUpdate::Loading), "Loading images...\n");
        assert_eq!(
            render_update(&ViewUpdate::NoResults),
            "No images found for the selected date range.\n"
        );
        assert_eq!(
            render_update(&ViewUpdate::Alert("Start date must be before end date".to_string())),
            "! Start date must be before end date\n"
        );
    }
}
