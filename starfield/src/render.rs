//! Rendering: paints a frame's draw list to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the [`DrawOp`]s produced by [`crate::engine::SceneCore::step`]
//! and produces pixels. It does not mutate any scene state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) hands the result to the host.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::engine::DrawOp;
use crate::geom::Point;

const STREAK_HEAD_COLOR: &str = "rgba(255, 255, 255, 1)";
const STREAK_TAIL_COLOR: &str = "rgba(255, 255, 255, 0)";

/// Clear the `width` × `height` surface and paint `ops` in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, ops: &[DrawOp]) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    for op in ops {
        if let Some(width) = op.line_width() {
            ctx.set_line_width(width);
        }
        match *op {
            DrawOp::Dot { center, radius, color, alpha } => draw_dot(ctx, center, radius, color, alpha)?,
            DrawOp::Link { from, to, color, alpha } => draw_link(ctx, from, to, color, alpha),
            DrawOp::Streak { head, tail } => draw_streak(ctx, head, tail)?,
        }
    }

    Ok(())
}

fn draw_dot(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    color: &str,
    alpha: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(color);
    ctx.set_global_alpha(alpha);
    ctx.fill();
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_link(ctx: &CanvasRenderingContext2d, from: Point, to: Point, color: &str, alpha: f64) {
    ctx.begin_path();
    ctx.set_stroke_style_str(color);
    ctx.set_global_alpha(alpha);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
    ctx.set_global_alpha(1.0);
}

fn draw_streak(ctx: &CanvasRenderingContext2d, head: Point, tail: Point) -> Result<(), JsValue> {
    let gradient = ctx.create_linear_gradient(head.x, head.y, tail.x, tail.y);
    gradient.add_color_stop(0.0, STREAK_HEAD_COLOR)?;
    gradient.add_color_stop(1.0, STREAK_TAIL_COLOR)?;

    ctx.begin_path();
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.move_to(head.x, head.y);
    ctx.line_to(tail.x, tail.y);
    ctx.stroke();
    Ok(())
}
