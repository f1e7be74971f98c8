use image::Rgba;

/// Red, green and blue must all be strictly above this value for a pixel to
/// count as background.
pub const WHITE_THRESHOLD: u8 = 240;

pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD
}

/// Clear the alpha of a near-white pixel. Other pixels are returned as is.
pub fn strip_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    if is_near_white(&pixel) {
        let [r, g, b, _] = pixel.0;
        Rgba([r, g, b, 0])
    } else {
        pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_near_white(&Rgba([240, 240, 240, 255])));
        assert!(is_near_white(&Rgba([241, 241, 241, 255])));

        assert_eq!(strip_pixel(Rgba([240, 240, 240, 255])), Rgba([240, 240, 240, 255]));
        assert_eq!(strip_pixel(Rgba([241, 241, 241, 255])), Rgba([241, 241, 241, 0]));
    }

    #[test]
    fn test_every_channel_must_pass() {
        assert!(!is_near_white(&Rgba([241, 241, 240, 255])));
        assert!(!is_near_white(&Rgba([241, 240, 241, 255])));
        assert!(!is_near_white(&Rgba([240, 241, 241, 255])));

        // Near-white on two channels keeps its original alpha
        assert_eq!(strip_pixel(Rgba([250, 250, 100, 128])), Rgba([250, 250, 100, 128]));
    }

    #[test]
    fn test_alpha_is_ignored_by_predicate() {
        assert!(is_near_white(&Rgba([255, 255, 255, 0])));
        assert!(is_near_white(&Rgba([255, 255, 255, 17])));
        assert!(!is_near_white(&Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(strip_pixel(Rgba([255, 255, 255, 255])), Rgba([255, 255, 255, 0]));
        assert_eq!(strip_pixel(Rgba([255, 255, 255, 0])), Rgba([255, 255, 255, 0]));
        assert_eq!(strip_pixel(Rgba([0, 0, 0, 255])), Rgba([0, 0, 0, 255]));
        assert_eq!(strip_pixel(Rgba([245, 245, 200, 255])), Rgba([245, 245, 200, 255]));
    }

    #[test]
    fn test_strip_pixel_is_idempotent() {
        for value in (0..=255u8).step_by(5) {
            for alpha in [0u8, 77, 255] {
                let pixel = Rgba([value, value.saturating_add(10), value, alpha]);
                let once = strip_pixel(pixel);
                assert_eq!(strip_pixel(once), once);
            }
        }
    }
}
