//! Renderer tests across every glyph mode and emotion

mod test_helpers;

use emoji_overlay::emotion::Emotion;
use emoji_overlay::render::{GlyphMode, GlyphRenderer};
use emoji_overlay::Error;
use test_helpers::{blank_frame, lit_pixels};

const ALL_EMOTIONS: [Emotion; 8] = [
    Emotion::Happy,
    Emotion::Sad,
    Emotion::Angry,
    Emotion::Surprise,
    Emotion::Neutral,
    Emotion::Disgust,
    Emotion::Fear,
    Emotion::Unknown,
];

#[test]
fn test_every_mode_and_emotion_draws_something() {
    for mode in GlyphMode::ALL {
        let renderer = GlyphRenderer::new(mode);
        for emotion in ALL_EMOTIONS {
            let mut frame = blank_frame(200, 200);
            renderer.draw(&mut frame, (100, 100), 80, emotion, 7);
            assert!(lit_pixels(&frame) > 100, "{mode} / {emotion} drew nothing");
        }
    }
}

#[test]
fn test_drawing_is_deterministic() {
    for mode in GlyphMode::ALL {
        let renderer = GlyphRenderer::new(mode);
        let mut a = blank_frame(240, 240);
        let mut b = blank_frame(240, 240);
        renderer.draw(&mut a, (120, 120), 90, Emotion::Fear, 42);
        renderer.draw(&mut b, (120, 120), 90, Emotion::Fear, 42);
        assert_eq!(a, b, "{mode} is not deterministic");
    }
}

#[test]
fn test_drawing_clips_at_borders() {
    let centers = [(0, 0), (-40, 50), (50, -40), (199, 199), (260, 100), (100, 5000), (-5000, -5000)];
    for mode in GlyphMode::ALL {
        let renderer = GlyphRenderer::new(mode);
        for center in centers {
            let mut frame = blank_frame(200, 200);
            renderer.draw(&mut frame, center, 80, Emotion::Happy, 3);
        }
    }
}

#[test]
fn test_degenerate_sizes_do_not_panic() {
    for mode in GlyphMode::ALL {
        let renderer = GlyphRenderer::new(mode);
        for size in [0, 1, 2, 5, 600] {
            let mut frame = blank_frame(120, 120);
            renderer.draw(&mut frame, (60, 60), size, Emotion::Surprise, 0);
        }
    }
}

#[test]
fn test_draws_stay_near_the_glyph() {
    // Face disc plus the widest halo (cyberpunk orbit + particle)
    let size = 80;
    let reach = 40 + 28;
    for mode in GlyphMode::ALL {
        let renderer = GlyphRenderer::new(mode);
        let mut frame = blank_frame(300, 300);
        renderer.draw(&mut frame, (150, 150), size, Emotion::Angry, 19);
        for (x, y, p) in frame.enumerate_pixels() {
            if p.0 != [0, 0, 0] {
                let dx = f64::from(x) - 150.0;
                let dy = f64::from(y) - 150.0;
                assert!(dx.hypot(dy) <= f64::from(reach) + 3.0, "{mode} pixel at ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_animated_modes_change_between_frames() {
    for mode in [GlyphMode::Cartoon, GlyphMode::Neon, GlyphMode::Cyberpunk] {
        let renderer = GlyphRenderer::new(mode);
        let mut first = blank_frame(200, 200);
        let mut later = blank_frame(200, 200);
        renderer.draw(&mut first, (100, 100), 80, Emotion::Neutral, 0);
        renderer.draw(&mut later, (100, 100), 80, Emotion::Neutral, 13);
        assert_ne!(first, later, "{mode} does not animate");
    }
}

#[test]
fn test_mode_switch_by_name() {
    let mut renderer = GlyphRenderer::default();
    assert_eq!(renderer.mode(), GlyphMode::Neon);

    renderer.set_mode_by_name("cartoon").unwrap();
    assert_eq!(renderer.mode(), GlyphMode::Cartoon);

    let result = renderer.set_mode_by_name("watercolor");
    assert!(matches!(result, Err(Error::InvalidMode(name)) if name == "watercolor"));
    assert_eq!(renderer.mode(), GlyphMode::Cartoon);
}
