//! Camera for ray generation.
//!
//! A pinhole camera described by a position, Euler rotation and a
//! focal-length-like `field_of_view`. Input handlers drive it through
//! [`CameraControl`] presses; [`Camera::apply_movement`] advances the pose by
//! one step.

use glint_math::{rotate_vector, Ray, Vec3};
use std::f64::consts::FRAC_PI_2;

/// Rotation applied per step for each unit of sensitivity.
const TURN_RATE: f64 = 0.1;

/// A single movement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraControl {
    TurnLeft,
    TurnRight,
    LookUp,
    LookDown,
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    /// Move towards -Y (up on screen)
    Rise,
    /// Move towards +Y (down on screen)
    Sink,
}

impl CameraControl {
    /// The control that cancels this one.
    pub fn opposite(self) -> Self {
        use CameraControl::*;
        match self {
            TurnLeft => TurnRight,
            TurnRight => TurnLeft,
            LookUp => LookDown,
            LookDown => LookUp,
            Forward => Back,
            Back => Forward,
            StrafeLeft => StrafeRight,
            StrafeRight => StrafeLeft,
            Rise => Sink,
            Sink => Rise,
        }
    }
}

/// Which controls are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub rise: bool,
    pub sink: bool,
}

impl MovementIntent {
    fn flag_mut(&mut self, control: CameraControl) -> &mut bool {
        use CameraControl::*;
        match control {
            TurnLeft => &mut self.turn_left,
            TurnRight => &mut self.turn_right,
            LookUp => &mut self.look_up,
            LookDown => &mut self.look_down,
            Forward => &mut self.forward,
            Back => &mut self.back,
            StrafeLeft => &mut self.strafe_left,
            StrafeRight => &mut self.strafe_right,
            Rise => &mut self.rise,
            Sink => &mut self.sink,
        }
    }

    /// Hold `control`. Holding a control releases its opposite.
    pub fn press(&mut self, control: CameraControl) {
        *self.flag_mut(control) = true;
        *self.flag_mut(control.opposite()) = false;
    }

    /// Release `control`.
    pub fn release(&mut self, control: CameraControl) {
        *self.flag_mut(control) = false;
    }

    /// Check if any control is held.
    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

/// Pinhole camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Euler angles in radians (x = pitch, y = yaw, z = roll)
    pub rotation: Vec3,
    /// Image plane distance in pixels; larger means narrower view
    pub field_of_view: f64,
    /// Step size for movement and rotation
    pub sensitivity: f64,
    movement: MovementIntent,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -10.0),
            rotation: Vec3::ZERO,
            field_of_view: 200.0,
            sensitivity: 0.5,
            movement: MovementIntent::default(),
        }
    }

    /// Create a camera whose field of view suits a frame `width` pixels wide.
    pub fn for_width(width: u32) -> Self {
        Self::new().with_field_of_view(40.0 * width as f64 / 50.0)
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set camera rotation (radians).
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the field of view term.
    pub fn with_field_of_view(mut self, field_of_view: f64) -> Self {
        self.field_of_view = field_of_view;
        self
    }

    /// Set movement sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Currently held controls.
    pub fn movement(&self) -> MovementIntent {
        self.movement
    }

    /// Hold a movement control.
    pub fn press(&mut self, control: CameraControl) {
        self.movement.press(control);
    }

    /// Release a movement control.
    pub fn release(&mut self, control: CameraControl) {
        self.movement.release(control);
    }

    /// Release every control.
    pub fn release_all(&mut self) {
        self.movement = MovementIntent::default();
    }

    /// Advance the pose by one step according to the held controls.
    pub fn apply_movement(&mut self) {
        let m = self.movement;
        let s = self.sensitivity;

        if m.turn_left {
            self.rotation.y -= TURN_RATE * s;
        }
        if m.turn_right {
            self.rotation.y += TURN_RATE * s;
        }
        if m.look_up {
            self.rotation.x += TURN_RATE * s;
        }
        if m.look_down {
            self.rotation.x -= TURN_RATE * s;
        }
        if m.forward {
            self.position += self.heading(0.0) * s;
        }
        if m.strafe_left {
            self.position -= self.heading(FRAC_PI_2) * s;
        }
        if m.back {
            self.position -= self.heading(0.0) * s;
        }
        if m.strafe_right {
            self.position += self.heading(FRAC_PI_2) * s;
        }
        if m.rise {
            self.position.y -= s;
        }
        if m.sink {
            self.position.y += s;
        }
    }

    /// Ground heading for the current yaw plus `offset` radians.
    fn heading(&self, offset: f64) -> Vec3 {
        let yaw = self.rotation.y + offset;
        let roll = self.rotation.z;
        Vec3::new(yaw.sin(), yaw.cos() * roll.sin(), yaw.cos() * roll.cos())
    }

    /// Generate the primary ray through pixel (x, y) of a `width` x `height` frame.
    ///
    /// The direction is `normalize(x - width/2, y - height/2, field_of_view)`
    /// rotated by the camera rotation, so the result is unit length.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let i = x as f64 - width as f64 / 2.0;
        let j = y as f64 - height as f64 / 2.0;
        let local = Vec3::new(i, j, self.field_of_view).normalize();

        Ray::new(self.position, rotate_vector(local, self.rotation))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
