use super::edges::ScreenEdges;
use super::gesture::{Gesture, GestureState};
use super::hover::Hover;
use super::momentum::Momentum;
use super::multi_contact::{apply_zoom, pinch_delta};
use super::pose::CameraPose;
use super::single_contact::SingleContactMotion;
use super::stabilizer::{Stabilizer, StabilizerPhase};
use super::tilt;
use crate::input::{InputSample, ScreenSize};
use crate::options::Options;
use crate::util::frame_timing::FrameTime;

/// Touch/mouse camera controller.
///
/// Call [`update`](Self::update) once per rendered frame with that frame's
/// input. Within a frame the gesture branch (single-contact drag, pinch, or
/// idle stabilization) runs first, then rotation momentum, then the hover
/// bob; each step sees the pose the previous one wrote.
pub struct CameraController {
    options: Options,
    edges: ScreenEdges,
    gesture: GestureState,
    stabilizer: Stabilizer,
    momentum: Momentum,
    hover: Hover,
}

impl CameraController {
    /// Build a controller for a camera starting at `initial`.
    ///
    /// The starting height becomes the hover baseline; `screen` is captured
    /// for screen-edge queries.
    pub fn new(options: Options, initial: &CameraPose, screen: ScreenSize) -> Self {
        let edges = ScreenEdges::new(screen, options.touch.screen_edge_border);
        log::debug!(
            "camera controller at {:?}, hover baseline {:.2}",
            initial.position,
            initial.position.y
        );
        Self {
            options,
            edges,
            gesture: GestureState::default(),
            stabilizer: Stabilizer::default(),
            momentum: Momentum::default(),
            hover: Hover::new(initial.position.y),
        }
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Gesture history.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Idle stabilization schedule phase.
    #[must_use]
    pub fn stabilizer_phase(&self) -> StabilizerPhase {
        self.stabilizer.phase()
    }

    /// Rotation momentum state.
    #[must_use]
    pub fn momentum(&self) -> &Momentum {
        &self.momentum
    }

    /// Height the hover bob is centred on.
    #[must_use]
    pub fn baseline_height(&self) -> f32 {
        self.hover.baseline()
    }

    /// Screen-edge queries for pointer positions.
    #[must_use]
    pub fn edges(&self) -> &ScreenEdges {
        &self.edges
    }

    /// Advance the camera by one frame.
    pub fn update(
        &mut self,
        pose: &mut CameraPose,
        input: &InputSample,
        time: FrameTime,
    ) {
        if input.is_idle() {
            self.gesture.set_interacting(false);
            self.momentum.clear();
            self.settle(pose, time);
            self.gesture.finish_frame(Gesture::None);
        } else {
            self.gesture.set_interacting(true);
            let gesture = Gesture::classify(input);
            match gesture {
                Gesture::SingleContact => {
                    self.single_contact(pose, input, time.delta);
                }
                Gesture::MultiContact => {
                    self.multi_contact(pose, input, time.delta);
                }
                Gesture::None => self.settle(pose, time),
            }
            self.momentum.apply(pose, &self.options, time.delta);
            self.gesture.finish_frame(gesture);
        }

        self.hover.apply(pose, time, &self.options);
    }

    /// Tilt the camera, clamped to the configured pitch range.
    ///
    /// No gesture drives tilt; hosts call this for their own bindings.
    pub fn tilt(&self, pose: &mut CameraPose, angle_delta: f32, dt: f32) {
        tilt::tilt(pose, angle_delta, &self.options, dt);
    }

    fn settle(&mut self, pose: &mut CameraPose, time: FrameTime) {
        self.stabilizer.settle(
            pose,
            time,
            self.gesture.has_interacted(),
            &self.options,
        );
    }

    fn single_contact(
        &mut self,
        pose: &mut CameraPose,
        input: &InputSample,
        dt: f32,
    ) {
        let Some(pointer) = input.single_pointer() else {
            return;
        };
        if !self.gesture.continues_pointer(pointer.source) {
            self.stabilizer.reset();
        }

        let Some(delta) =
            self.gesture.advance_anchor(pointer.source, pointer.position)
        else {
            return;
        };
        if !pointer.applies_motion {
            return;
        }

        let motion = SingleContactMotion::resolve(delta, &self.options, dt);
        log::trace!("single contact {delta:?} -> {motion:?}");
        motion.apply(pose, &self.options);
        if let SingleContactMotion::Rotate { degrees } = motion {
            self.momentum.arm(degrees);
        }
    }

    fn multi_contact(
        &mut self,
        pose: &mut CameraPose,
        input: &InputSample,
        dt: f32,
    ) {
        if !self.gesture.continues(Gesture::MultiContact) {
            self.stabilizer.reset();
            return;
        }

        if let [first, second] = input.contacts.as_slice() {
            if let Some(pinch) = pinch_delta(first, second) {
                log::trace!("pinch {pinch:.2}");
                apply_zoom(pose, pinch, &self.options, dt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::input::{Contact, ContactPhase};

    const DT: f32 = 0.1;

    /// Options with hover and momentum disabled so gesture motion can be
    /// observed in isolation.
    fn still_options() -> Options {
        let mut opts = Options::default();
        opts.hover.amplitude = 0.0;
        opts.hover.smoothness = 0.0;
        opts.direction_change.angle = 0.0;
        opts
    }

    struct Rig {
        controller: CameraController,
        pose: CameraPose,
        time: FrameTime,
    }

    impl Rig {
        fn new(options: Options, pose: CameraPose) -> Self {
            Self {
                controller: CameraController::new(
                    options,
                    &pose,
                    ScreenSize::new(800.0, 600.0),
                ),
                pose,
                time: FrameTime::new(1.0, DT),
            }
        }

        fn frame(&mut self, input: &InputSample) {
            self.time = self.time.step(DT);
            self.controller.update(&mut self.pose, input, self.time);
        }
    }

    fn touch_at(x: f32, y: f32, delta: Vec2) -> InputSample {
        InputSample::touches(vec![Contact::moved(0, Vec2::new(x, y), delta)])
    }

    #[test]
    fn horizontal_swipe_rotates_and_arms_momentum() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        let start_yaw = rig.pose.yaw();

        rig.frame(&InputSample::touches(vec![Contact::began(
            0,
            Vec2::new(100.0, 100.0),
        )]));
        assert_eq!(rig.pose.yaw(), start_yaw);

        for i in 1..=3 {
            let x = 100.0 + 40.0 * i as f32;
            rig.frame(&touch_at(x, 100.0, Vec2::new(40.0, 0.0)));
            assert!((rig.pose.yaw() - start_yaw - 4.0 * i as f32).abs() < 1e-3);
        }

        assert!(rig.controller.momentum().is_active());
        assert!(rig.controller.momentum().last_rotation() > 0.0);
        assert_eq!(rig.pose.position, Vec3::new(0.0, 50.0, 0.0));
    }

    #[test]
    fn transition_frames_produce_no_motion() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        let before = rig.pose;

        // 0 -> 1 contacts: anchor only, even with a large jump
        rig.frame(&touch_at(700.0, 500.0, Vec2::new(600.0, 400.0)));
        assert_eq!(rig.pose, before);

        // 1 -> 2 contacts: no zoom on the first pinch frame
        let pinch = InputSample::touches(vec![
            Contact::stationary(0, Vec2::ZERO),
            Contact::moved(1, Vec2::new(80.0, 0.0), Vec2::new(-20.0, 0.0)),
        ]);
        rig.frame(&pinch);
        assert_eq!(rig.pose, before);

        // The same input on the next frame applies
        rig.frame(&pinch);
        assert!((rig.pose.position.y - 52.0).abs() < 1e-4);
    }

    #[test]
    fn motion_resumes_identically_after_transition() {
        let run = |warmup: usize| {
            let mut rig = Rig::new(
                still_options(),
                CameraPose::at(Vec3::new(0.0, 50.0, 0.0)),
            );
            for _ in 0..warmup {
                rig.frame(&InputSample::idle());
            }
            rig.frame(&touch_at(200.0, 200.0, Vec2::ZERO));
            rig.frame(&touch_at(205.0, 215.0, Vec2::new(5.0, 15.0)));
            rig.pose
        };
        let pose = run(0);
        assert_eq!(pose, run(3));
        assert!((pose.position.y - 65.0).abs() < 1e-4);
    }

    #[test]
    fn pinch_scenario_raises_height() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        let settled = InputSample::touches(vec![
            Contact::stationary(0, Vec2::ZERO),
            Contact::stationary(1, Vec2::new(100.0, 0.0)),
        ]);
        rig.frame(&settled);
        rig.frame(&InputSample::touches(vec![
            Contact::stationary(0, Vec2::ZERO),
            Contact::moved(1, Vec2::new(80.0, 0.0), Vec2::new(-20.0, 0.0)),
        ]));
        assert!((rig.pose.position.y - 52.0).abs() < 1e-4);
    }

    #[test]
    fn mouse_drag_uses_the_single_contact_mapper() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        rig.frame(&InputSample::mouse_drag(Vec2::new(300.0, 300.0)));
        rig.frame(&InputSample::mouse_drag(Vec2::new(300.0, 300.0)));
        assert_eq!(rig.pose.position, Vec3::new(0.0, 50.0, 0.0));
        rig.frame(&InputSample::mouse_drag(Vec2::new(350.0, 300.0)));
        assert!((rig.pose.yaw() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn held_touch_applies_no_drag_motion() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        rig.frame(&InputSample::touches(vec![Contact::began(0, Vec2::ONE)]));
        rig.frame(&InputSample::touches(vec![Contact::stationary(
            0,
            Vec2::new(9.0, 9.0),
        )]));
        assert_eq!(rig.pose, CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
    }

    #[test]
    fn idle_frames_clear_momentum_and_leave_pose() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        rig.frame(&touch_at(40.0, 0.0, Vec2::new(40.0, 0.0)));
        assert!(rig.controller.momentum().is_active());

        rig.frame(&InputSample::idle());
        assert!(!rig.controller.momentum().is_active());
        assert!(!rig.controller.gesture().is_interacting());

        // Upright camera: stabilization has nothing to change
        let before = rig.pose;
        for _ in 0..20 {
            rig.frame(&InputSample::idle());
            assert!((rig.pose.yaw() - before.yaw()).abs() < 1e-3);
            assert_eq!(rig.pose.position, before.position);
        }
    }

    #[test]
    fn momentum_keeps_spinning_while_touch_is_held() {
        let mut opts = still_options();
        opts.direction_change.angle = 5.0;
        let mut rig = Rig::new(opts, CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        rig.frame(&touch_at(-40.0, 0.0, Vec2::new(-40.0, 0.0)));
        let after_swipe = rig.pose.yaw();

        let held =
            InputSample::touches(vec![Contact::stationary(0, Vec2::new(-40.0, 0.0))]);
        rig.frame(&held);
        rig.frame(&held);
        assert!(rig.pose.yaw() < after_swipe - 4.0);

        rig.frame(&InputSample::idle());
        let stopped = rig.pose.yaw();
        rig.frame(&InputSample::idle());
        assert!((rig.pose.yaw() - stopped).abs() < 1e-4);
    }

    #[test]
    fn stabilization_scenario() {
        let opts = still_options();
        let start =
            CameraPose::from_euler_degrees(Vec3::new(10.0, 50.0, 10.0), 20.0, 35.0, 0.0);
        let mut rig = Rig::new(opts, start);

        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        rig.frame(&touch_at(40.0, 0.0, Vec2::new(40.0, 0.0)));
        let after_gesture = rig.pose;

        for frame in 1..=10 {
            rig.frame(&InputSample::idle());
            assert_eq!(rig.pose.position, after_gesture.position);
            if frame <= 5 {
                assert_eq!(rig.pose.rotation, after_gesture.rotation, "frame {frame}");
            } else {
                assert_eq!(rig.controller.stabilizer_phase(), StabilizerPhase::Stabilizing);
            }
            if frame == 6 {
                assert_ne!(rig.pose.rotation, after_gesture.rotation);
                assert!(rig.pose.pitch() < after_gesture.pitch());
            }
        }
        assert!(rig.pose.pitch() < after_gesture.pitch());
        assert!((rig.pose.yaw() - after_gesture.yaw()).abs() < 1.0);
    }

    #[test]
    fn leveling_under_a_crowded_screen_keeps_momentum_yaw() {
        let mut opts = still_options();
        opts.direction_change.angle = 5.0;
        let start =
            CameraPose::from_euler_degrees(Vec3::new(0.0, 50.0, 0.0), 0.0, 30.0, 0.0);
        let mut rig = Rig::new(opts, start);
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        rig.frame(&touch_at(40.0, 0.0, Vec2::new(40.0, 0.0)));

        let crowd = InputSample::touches(vec![
            Contact::stationary(0, Vec2::ZERO),
            Contact::stationary(1, Vec2::ONE),
            Contact::stationary(2, Vec2::X),
        ]);
        for frame in 1..=20 {
            let yaw = rig.pose.yaw();
            rig.frame(&crowd);
            assert!(rig.pose.yaw() > yaw + 2.0, "frame {frame}");
        }
        assert!(rig.controller.momentum().is_active());
        assert_eq!(rig.controller.stabilizer_phase(), StabilizerPhase::Stabilizing);
        assert!(rig.pose.pitch() < 30.0);

        let spun = rig.pose.yaw();
        assert!(spun > 50.0);
        for _ in 0..20 {
            rig.frame(&InputSample::idle());
            assert!((rig.pose.yaw() - spun).abs() < 0.05);
        }
        assert!(rig.pose.pitch() < 5.0);
    }

    #[test]
    fn switching_from_touch_to_mouse_reanchors() {
        let mut rig =
            Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        rig.frame(&touch_at(40.0, 0.0, Vec2::new(40.0, 0.0)));
        rig.frame(&InputSample::touches(vec![Contact {
            id: 0,
            position: Vec2::new(40.0, 0.0),
            delta: Vec2::ZERO,
            phase: ContactPhase::Ended,
        }]));
        let lifted = rig.pose;
        assert!((lifted.yaw() - 4.0).abs() < 1e-3);

        // Far from the touch anchor: no jump on the first mouse frame
        rig.frame(&InputSample::mouse_drag(Vec2::new(600.0, 0.0)));
        assert!((rig.pose.yaw() - lifted.yaw()).abs() < 1e-3);
        assert_eq!(rig.pose.position, lifted.position);
        rig.frame(&InputSample::mouse_drag(Vec2::new(650.0, 0.0)));
        assert!((rig.pose.yaw() - 9.0).abs() < 1e-3);
    }

    #[test]
    fn no_stabilization_at_startup() {
        let start =
            CameraPose::from_euler_degrees(Vec3::new(0.0, 50.0, 0.0), 0.0, 40.0, 0.0);
        let mut rig = Rig::new(still_options(), start);
        for _ in 0..50 {
            rig.frame(&InputSample::idle());
        }
        assert_eq!(rig.controller.stabilizer_phase(), StabilizerPhase::Armed);
        assert_eq!(rig.pose, start);
    }

    #[test]
    fn new_gesture_cancels_scheduled_stabilization() {
        let start =
            CameraPose::from_euler_degrees(Vec3::new(0.0, 50.0, 0.0), 0.0, 40.0, 0.0);
        let mut rig = Rig::new(still_options(), start);
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        rig.frame(&InputSample::idle());
        assert_eq!(rig.controller.stabilizer_phase(), StabilizerPhase::Waiting);
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        assert_eq!(rig.controller.stabilizer_phase(), StabilizerPhase::Armed);
    }

    #[test]
    fn crowded_screen_settles_like_idle() {
        let start =
            CameraPose::from_euler_degrees(Vec3::new(0.0, 50.0, 0.0), 0.0, 40.0, 0.0);
        let mut rig = Rig::new(still_options(), start);
        rig.frame(&touch_at(0.0, 0.0, Vec2::ZERO));
        let three = InputSample::touches(vec![
            Contact::moved(0, Vec2::ZERO, Vec2::X),
            Contact::moved(1, Vec2::ONE, Vec2::X),
            Contact::moved(2, Vec2::X, Vec2::X),
        ]);
        rig.frame(&three);
        assert_eq!(rig.controller.gesture().previous(), Gesture::None);
        assert_eq!(rig.controller.stabilizer_phase(), StabilizerPhase::Waiting);
        assert!(rig.controller.gesture().is_interacting());
    }

    #[test]
    fn height_stays_in_limits_under_any_gesture() {
        let mut opts = Options::default();
        opts.hover.amplitude = 100.0;
        let mut rig = Rig::new(opts, CameraPose::at(Vec3::new(0.0, 50.0, 0.0)));
        let (min_y, max_y) = (10.0, 80.0);
        let inputs = [
            touch_at(0.0, 0.0, Vec2::ZERO),
            touch_at(0.0, 300.0, Vec2::new(0.0, 300.0)),
            touch_at(0.0, 600.0, Vec2::new(0.0, 300.0)),
            touch_at(0.0, 0.0, Vec2::new(0.0, -600.0)),
            InputSample::touches(vec![
                Contact::stationary(0, Vec2::ZERO),
                Contact::stationary(1, Vec2::new(500.0, 0.0)),
            ]),
            InputSample::touches(vec![
                Contact::stationary(0, Vec2::ZERO),
                Contact::moved(1, Vec2::new(1.0, 0.0), Vec2::new(-499.0, 0.0)),
            ]),
            InputSample::idle(),
        ];
        for _ in 0..20 {
            for input in &inputs {
                rig.frame(input);
                assert!(rig.pose.position.y >= min_y && rig.pose.position.y <= max_y);
            }
        }
    }

    #[test]
    fn controller_tilt_is_clamped() {
        let rig = Rig::new(still_options(), CameraPose::default());
        let mut pose = CameraPose::from_euler_degrees(Vec3::ZERO, 0.0, 45.0, 0.0);
        rig.controller.tilt(&mut pose, -5000.0, DT);
        assert!(pose.pitch() <= 80.0 + 1e-3);
        rig.controller.tilt(&mut pose, 5000.0, DT);
        assert!(pose.pitch() >= 10.0 - 1e-3);
    }

    #[test]
    fn baseline_and_edges_come_from_construction() {
        let rig = Rig::new(still_options(), CameraPose::at(Vec3::new(0.0, 42.0, 0.0)));
        assert_eq!(rig.controller.baseline_height(), 42.0);
        assert!(rig.controller.edges().is_near_horizontal_edge(Vec2::new(798.0, 300.0)));
    }
}
