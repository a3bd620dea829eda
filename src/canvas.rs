//! `Surface` implementation over a 2D canvas context.

use crate::constants::LABEL_FONT;
use crate::logos::LogoAtlas;
use backdrop_core::{Color, Paint, Surface, Tech};
use glam::DVec2;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    logos: Option<Rc<LogoAtlas>>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, logos: None }
    }

    pub fn with_logos(ctx: web::CanvasRenderingContext2d, logos: Rc<LogoAtlas>) -> Self {
        Self {
            ctx,
            logos: Some(logos),
        }
    }

    fn gradient(&self, paint: &Paint) -> Option<web::CanvasGradient> {
        match paint {
            Paint::Solid(_) => None,
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                inner,
                outer,
            } => {
                let g = self
                    .ctx
                    .create_radial_gradient(
                        center.x,
                        center.y,
                        *inner_radius,
                        center.x,
                        center.y,
                        *outer_radius,
                    )
                    .ok()?;
                _ = g.add_color_stop(0.0, &inner.to_css());
                _ = g.add_color_stop(1.0, &outer.to_css());
                Some(g)
            }
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                for (offset, color) in stops {
                    _ = g.add_color_stop(*offset as f32, &color.to_css());
                }
                Some(g)
            }
        }
    }

    fn apply_fill(&self, paint: &Paint) {
        match (paint, self.gradient(paint)) {
            (Paint::Solid(c), _) => self.ctx.set_fill_style_str(&c.to_css()),
            (_, Some(g)) => {
                #[allow(deprecated)]
                self.ctx.set_fill_style(&g);
            }
            (_, None) => {}
        }
    }

    fn apply_stroke(&self, paint: &Paint) {
        match (paint, self.gradient(paint)) {
            (Paint::Solid(c), _) => self.ctx.set_stroke_style_str(&c.to_css()),
            (_, Some(g)) => {
                #[allow(deprecated)]
                self.ctx.set_stroke_style(&g);
            }
            (_, None) => {}
        }
    }

    fn circle_path(&self, center: DVec2, radius: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: DVec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        if self.circle_path(center, radius).is_ok() {
            self.apply_fill(paint);
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, line_width: f64, paint: &Paint) {
        if self.circle_path(center, radius).is_ok() {
            self.apply_stroke(paint);
            self.ctx.set_line_width(line_width);
            self.ctx.stroke();
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, line_width: f64, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }

    fn draw_logo(&mut self, tech: Tech, center: DVec2, size: f64, rotation: f64, alpha: f64) {
        let Some(img) = self.logos.as_ref().and_then(|l| l.image(tech)) else {
            return;
        };
        if !img.complete() {
            return;
        }
        self.ctx.save();
        _ = self.ctx.translate(center.x, center.y);
        _ = self.ctx.rotate(rotation);
        self.ctx.set_global_alpha(alpha);
        _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            -size / 2.0,
            -size / 2.0,
            size,
            size,
        );
        self.ctx.restore();
    }

    fn fill_label(&mut self, text: &str, at: DVec2, color: Color) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align("center");
        _ = self.ctx.fill_text(text, at.x, at.y);
        self.ctx.restore();
    }
}
