//! A little turtle sprite drawn at the turtle's own pose

use super::{Turtle, TurtleState};
use crate::error::Result;

/// Forward and sideways distance from the body center to each leg
const LEG_OFFSET: i32 = 7;
/// Distance from the body center to the head
const HEAD_OFFSET: i32 = 10;
/// Outer and inner radius of a leg or the head
const LIMB_RINGS: (i32, i32) = (5, 3);
/// Largest fill-colored body radius; shells shrink by 4 down to 1
const BODY_RADIUS: i32 = 9;

impl Turtle {
    /// Draw a turtle sprite centered on the current position, facing the
    /// current heading
    ///
    /// Each limb is a pen-colored disc with a fill-colored disc inside; the
    /// shell is a stack of such rings. The pose, colors and pen state are the
    /// same afterwards as before, even if a step fails.
    pub fn draw_turtle_icon(&mut self) -> Result<()> {
        let original = self.backup();
        let result = self.draw_icon_parts();
        self.restore(original);
        result
    }

    fn draw_icon_parts(&mut self) -> Result<()> {
        let original = self.backup();
        self.pen_up();

        for along in [-LEG_OFFSET, LEG_OFFSET] {
            for side in [-LEG_OFFSET, LEG_OFFSET] {
                let anchor = self.backup();
                self.forward(along)?;
                self.strafe_left(side)?;
                self.ringed_disc(LIMB_RINGS.0, LIMB_RINGS.1, &original)?;
                self.restore(anchor);
            }
        }

        let anchor = self.backup();
        self.forward(HEAD_OFFSET)?;
        self.ringed_disc(LIMB_RINGS.0, LIMB_RINGS.1, &original)?;
        self.restore(anchor);

        for inner in (0..=BODY_RADIUS).rev().step_by(4) {
            self.ringed_disc(inner + 2, inner, &original)?;
        }
        Ok(())
    }

    /// Pen-colored disc of `outer` radius with a fill-colored disc of `inner`
    /// radius on top, both at the current position
    fn ringed_disc(&mut self, outer: i32, inner: i32, original: &TurtleState) -> Result<()> {
        let pen = self.state.stroke_color;
        self.set_fill_color(pen.red, pen.green, pen.blue);
        self.fill_circle_here(outer)?;

        let fill = original.fill_color;
        self.set_fill_color(fill.red, fill.green, fill.blue);
        self.fill_circle_here(inner)
    }
}
