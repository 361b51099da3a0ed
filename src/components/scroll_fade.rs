//! Scroll-linked opacity, kept as pure functions of the scroll offset so
//! the fades carry no state of their own. Pages recompute these on every
//! scroll event and write the result straight into inline styles.

/// Progress of a section through the viewport: 0.0 while its top edge is
/// still below the bottom of the viewport, 1.0 once its bottom edge has
/// left through the top. `top` is the section's bounding-rect top in
/// viewport coordinates.
pub fn section_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let travel = viewport + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport - top) / travel).clamp(0.0, 1.0)
}

/// Linear rise from 0 to 1 across `band`. Outside the band the value is
/// held flat, so a zero-width band acts as a step.
pub fn fade_in(progress: f64, band: (f64, f64)) -> f64 {
    let (start, end) = band;
    if progress >= end {
        1.0
    } else if progress <= start {
        0.0
    } else {
        (progress - start) / (end - start)
    }
}

/// Transparent before `fade_in`, opaque between the bands, transparent
/// again after `fade_out`.
pub fn fade_band(progress: f64, fade_in_band: (f64, f64), fade_out_band: (f64, f64)) -> f64 {
    fade_in(progress, fade_in_band).min(1.0 - fade_in(progress, fade_out_band))
}

/// The fade used by full-viewport sections. `stagger` shifts the band
/// inward in steps of 0.03 so a section's title, body and extras reveal in
/// sequence and retire in reverse.
pub fn section_fade(progress: f64, stagger: usize) -> f64 {
    let shift = 0.03 * stagger as f64;
    fade_band(
        progress,
        (0.15 + shift, 0.25 + shift),
        (0.65 - shift, 0.75 - shift),
    )
}

/// The hero holds full opacity for the first 30% of a viewport-height of
/// scrolling, then fades out completely by 40%.
pub fn hero_fade(progress: f64) -> f64 {
    fade_band(progress, (0.0, 0.0), (0.3, 0.4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_progress_clamps_to_the_unit_interval() {
        assert_eq!(section_progress(2000.0, 800.0, 900.0), 0.0);
        assert_eq!(section_progress(-2000.0, 800.0, 900.0), 1.0);
        assert_eq!(section_progress(900.0, 900.0, 900.0), 0.0);
        assert_eq!(section_progress(0.0, 900.0, 900.0), 0.5);
    }

    #[test]
    fn section_progress_handles_a_degenerate_viewport() {
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn fade_in_rises_linearly_across_the_band() {
        assert_eq!(fade_in(0.0, (0.15, 0.25)), 0.0);
        assert!((fade_in(0.20, (0.15, 0.25)) - 0.5).abs() < 1e-9);
        assert_eq!(fade_in(0.25, (0.15, 0.25)), 1.0);
        assert_eq!(fade_in(1.0, (0.15, 0.25)), 1.0);
    }

    #[test]
    fn fade_band_is_opaque_between_the_bands() {
        let band = |p| fade_band(p, (0.15, 0.25), (0.65, 0.75));
        assert_eq!(band(0.0), 0.0);
        assert_eq!(band(0.25), 1.0);
        assert_eq!(band(0.5), 1.0);
        assert_eq!(band(0.65), 1.0);
        assert!((band(0.70) - 0.5).abs() < 1e-9);
        assert_eq!(band(1.0), 0.0);
    }

    #[test]
    fn staggered_fades_reveal_in_sequence() {
        // at the same progress, later stages are still dimmer
        let p = 0.22;
        assert!(section_fade(p, 0) > section_fade(p, 1));
        assert!(section_fade(p, 1) > section_fade(p, 2));
    }

    #[test]
    fn hero_is_opaque_at_rest_and_gone_by_forty_percent() {
        assert_eq!(hero_fade(0.0), 1.0);
        assert_eq!(hero_fade(0.3), 1.0);
        assert!((hero_fade(0.35) - 0.5).abs() < 1e-9);
        assert_eq!(hero_fade(0.4), 0.0);
        assert_eq!(hero_fade(1.0), 0.0);
    }
}
