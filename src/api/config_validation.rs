use crate::error::{ScrollError, ScrollResult};
use crate::reveal::RevealConfig;

use super::InputControlsConfig;

pub(super) fn validate_input_controls_config(
    config: &InputControlsConfig,
) -> ScrollResult<()> {
    if !config.scroll_step.is_finite() || config.scroll_step <= 0.0 {
        return Err(ScrollError::InvalidConfig(
            "scroll_step must be finite and > 0".to_owned(),
        ));
    }
    if !config.drag_threshold_px.is_finite() || config.drag_threshold_px < 0.0 {
        return Err(ScrollError::InvalidConfig(
            "drag_threshold_px must be finite and >= 0".to_owned(),
        ));
    }
    validate_reveal_config(&config.reveal)
}

fn validate_reveal_config(reveal: &RevealConfig) -> ScrollResult<()> {
    if !reveal.threshold.is_finite() || !(0.0..=1.0).contains(&reveal.threshold) {
        return Err(ScrollError::InvalidConfig(
            "reveal threshold must be finite and in [0, 1]".to_owned(),
        ));
    }
    for (name, class) in [
        ("marker_class", &reveal.marker_class),
        ("revealed_class", &reveal.revealed_class),
    ] {
        if !is_css_class_name(class) {
            return Err(ScrollError::InvalidConfig(format!(
                "reveal {name} must be a non-empty class name without whitespace or dots, got {class:?}"
            )));
        }
    }
    if !reveal.offset_px.is_finite() {
        return Err(ScrollError::InvalidConfig(
            "reveal offset_px must be finite".to_owned(),
        ));
    }
    if !reveal.duration_secs.is_finite() || reveal.duration_secs < 0.0 {
        return Err(ScrollError::InvalidConfig(
            "reveal duration_secs must be finite and >= 0".to_owned(),
        ));
    }
    if reveal.easing.trim().is_empty() || reveal.easing.contains(['{', '}', ';']) {
        return Err(ScrollError::InvalidConfig(
            "reveal easing must be a single CSS timing function".to_owned(),
        ));
    }
    Ok(())
}

fn is_css_class_name(class: &str) -> bool {
    !class.is_empty()
        && !class
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '.' | '{' | '}' | ';' | ','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(validate_input_controls_config(&InputControlsConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_numbers() {
        for config in [
            InputControlsConfig::default().with_scroll_step(0.0),
            InputControlsConfig::default().with_scroll_step(f64::INFINITY),
            InputControlsConfig::default().with_drag_threshold_px(-1.0),
            InputControlsConfig::default().with_drag_threshold_px(f64::NAN),
        ] {
            assert!(matches!(
                validate_input_controls_config(&config),
                Err(ScrollError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn rejects_bad_reveal_settings() {
        let mut reveal = RevealConfig {
            threshold: 1.5,
            ..RevealConfig::default()
        };
        assert!(validate_reveal_config(&reveal).is_err());

        reveal.threshold = 0.1;
        reveal.marker_class = "two words".to_owned();
        assert!(validate_reveal_config(&reveal).is_err());

        reveal.marker_class = "animate".to_owned();
        reveal.easing = "ease; color: red".to_owned();
        assert!(validate_reveal_config(&reveal).is_err());
    }
}
