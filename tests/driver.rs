extern crate image as image_rs;
extern crate nalgebra as na;

mod common;

use std::path::PathBuf;
use std::time::Duration;
use image_rs::{Rgb,RgbImage};
use na::{Matrix3,Vector3};

use eisats_view::driver::{FrameSink,RenderedFrame,Termination,render_frame,run};
use eisats_view::image::FloatGrid;
use eisats_view::image::flow_field::FlowField;
use eisats_view::io::LoadError;
use eisats_view::io::loaded_data::FrameBundle;
use eisats_view::io::sequence::FrameSequence;
use eisats_view::numerics::pose::EgoMotion;
use eisats_view::visualize::DisplayParameters;
use eisats_view::visualize::overlay::{rotation_text,translation_text};
use eisats_view::ViewerError;

use common::SequenceFixture;

/// Records shown frames and requests a quit after `quit_after` frames.
struct RecordingSink {
    shown: Vec<usize>,
    budgets: Vec<Duration>,
    quit_after: Option<usize>
}

impl RecordingSink {
    fn new(quit_after: Option<usize>) -> RecordingSink {
        RecordingSink { shown: Vec::new(), budgets: Vec::new(), quit_after }
    }
}

impl FrameSink for RecordingSink {
    fn show(&mut self, frame: &RenderedFrame) -> Result<(), ViewerError> {
        self.shown.push(frame.frame);
        Ok(())
    }

    fn poll_quit(&mut self, budget: Duration) -> bool {
        self.budgets.push(budget);
        self.quit_after.map_or(false, |n| self.shown.len() >= n)
    }
}

fn bundle(ego_motion: Option<EgoMotion>, disparity: Option<FloatGrid>) -> FrameBundle {
    let flow = FlowField::new(FloatGrid::from_row_major(2, 1, &[1.0, 0.0]), FloatGrid::from_row_major(2, 1, &[0.0, 0.0])).unwrap();
    FrameBundle {
        frame: 7,
        left_image: RgbImage::new(200, 60),
        flow,
        disparity,
        ego_motion
    }
}

#[test]
fn runs_until_end_of_sequence() {
    let fixture = SequenceFixture::new("driver_end", 3, 2);
    for frame in 2..6 {
        fixture.write_complete_frame(frame);
    }
    let mut sink = RecordingSink::new(None);
    let parameters = DisplayParameters::default();

    let termination = run(FrameSequence::new(fixture.root(), fixture.parameters.clone()), &mut sink, &parameters).unwrap();
    assert_eq!(termination, Termination::EndOfSequence);
    assert_eq!(sink.shown, vec![2, 3, 4, 5]);
    assert!(sink.budgets.iter().all(|&b| b == Duration::from_millis(100)));
}

#[test]
fn stops_when_user_quits() {
    let fixture = SequenceFixture::new("driver_quit", 3, 2);
    for frame in 2..6 {
        fixture.write_complete_frame(frame);
    }
    let mut sink = RecordingSink::new(Some(2));
    let termination = run(FrameSequence::new(fixture.root(), fixture.parameters.clone()), &mut sink, &DisplayParameters::default()).unwrap();
    assert_eq!(termination, Termination::UserQuit);
    assert_eq!(sink.shown, vec![2, 3]);
}

#[test]
fn malformed_frame_surfaces_as_error() {
    let frames = vec![Ok(bundle(None, None)), Err(LoadError::malformed(&PathBuf::from("x.raw"), "short payload"))];
    let mut sink = RecordingSink::new(None);
    let result = run(frames, &mut sink, &DisplayParameters::default());
    assert!(matches!(result, Err(ViewerError::Load(LoadError::Malformed { .. }))));
    assert_eq!(sink.shown, vec![7]);
}

#[test]
fn render_draws_overlay_and_fills_missing_disparity() {
    let ego_motion = EgoMotion::new(Matrix3::identity(), Vector3::new(1.0, 2.0, 3.0));
    let parameters = DisplayParameters::default();
    let rendered = render_frame(&bundle(Some(ego_motion), None), &parameters);

    assert_eq!(rendered.frame, 7);
    assert_eq!(rendered.disparity.dimensions(), (200, 60));
    assert!(rendered.disparity.pixels().all(|p| p[0] == 0));
    assert_eq!(*rendered.flow.get_pixel(0, 0), Rgb([255, 0, 0]));
    assert_eq!(*rendered.flow.get_pixel(1, 0), Rgb([255, 255, 255]));

    let overlay = Rgb(parameters.overlay_color);
    let painted = rendered.left.pixels().filter(|&&p| p == overlay).count();
    assert!(painted > 0);
    // nothing is drawn below the second text line
    assert!(rendered.left.enumerate_pixels().filter(|(_, y, _)| *y > 40).all(|(_, _, p)| *p == Rgb([0, 0, 0])));
}

#[test]
fn render_normalizes_disparity() {
    let disparity = FloatGrid::from_row_major(2, 1, &[5.0, 15.0]);
    let rendered = render_frame(&bundle(None, Some(disparity)), &DisplayParameters::default());
    assert_eq!(rendered.disparity.get_pixel(0, 0)[0], 0);
    assert_eq!(rendered.disparity.get_pixel(1, 0)[0], 255);
}

#[test]
fn overlay_text_formats_rotation_and_translation() {
    let ego_motion = EgoMotion::new(Matrix3::identity(), Vector3::new(1.0, -2.5, 0.125));
    assert_eq!(rotation_text(Some(&ego_motion)), "Rotation: 0.000000 0.000000 0.000000");
    assert_eq!(translation_text(Some(&ego_motion)), "Translation: 1.000000 -2.500000 0.125000");
    assert_eq!(rotation_text(None), "Rotation: n/a");
    assert_eq!(translation_text(None), "Translation: n/a");
}
