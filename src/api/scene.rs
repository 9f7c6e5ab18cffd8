use serde::{Deserialize, Serialize};

use crate::api::chart_options::{AxisOptions, ChartOptions};
use crate::api::points::QuadrantPoint;
use crate::core::{LinearScale, PlotArea, Viewport};
use crate::error::{QuadrantError, QuadrantResult};
use crate::extensions::{ChartPlugin, PluginContext, WatermarkPlugin};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

/// Space reserved around the plot area for titles and tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    pub inset_left_px: f64,
    pub inset_right_px: f64,
    pub inset_top_px: f64,
    pub inset_bottom_px: f64,
    pub title_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tick_font_size_px: f64,
    pub tick_label_gap_px: f64,
    pub text_color: Color,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            inset_left_px: 56.0,
            inset_right_px: 16.0,
            inset_top_px: 36.0,
            inset_bottom_px: 52.0,
            title_font_size_px: 14.0,
            axis_title_font_size_px: 12.0,
            tick_font_size_px: 12.0,
            tick_label_gap_px: 6.0,
            text_color: Color::rgba(0.4, 0.4, 0.4, 1.0),
        }
    }
}

impl SceneStyle {
    pub fn plot_area(&self, viewport: Viewport) -> QuadrantResult<PlotArea> {
        let area = PlotArea {
            left: self.inset_left_px,
            top: self.inset_top_px,
            right: f64::from(viewport.width) - self.inset_right_px,
            bottom: f64::from(viewport.height) - self.inset_bottom_px,
        };
        if !area.is_valid() {
            return Err(QuadrantError::InvalidData(format!(
                "viewport {}x{} leaves no room for the plot area",
                viewport.width, viewport.height
            )));
        }
        Ok(area)
    }
}

/// Lays out one chart draw pass, then runs after-draw plugins on top.
///
/// The watermark plugin is registered automatically when the options carry
/// overlay labels; extra plugins run after it in registration order.
pub struct SceneBuilder<'a> {
    options: &'a ChartOptions,
    style: SceneStyle,
    plugins: Vec<Box<dyn ChartPlugin + 'a>>,
}

impl<'a> SceneBuilder<'a> {
    #[must_use]
    pub fn new(options: &'a ChartOptions) -> Self {
        let mut plugins: Vec<Box<dyn ChartPlugin + 'a>> = Vec::new();
        if let Some(labels) = &options.overlay {
            plugins.push(Box::new(WatermarkPlugin::new(labels.clone())));
        }
        Self {
            options,
            style: SceneStyle::default(),
            plugins,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: Box<dyn ChartPlugin + 'a>) -> Self {
        self.plugins.push(plugin);
        self
    }

    #[must_use]
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.id()).collect()
    }

    /// Square surface of the options' inner size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::square(self.options.dimensions.inner_px.round() as u32)
    }

    pub fn build(&self, points: &[QuadrantPoint]) -> QuadrantResult<RenderFrame> {
        let viewport = self.viewport();
        let area = self.style.plot_area(viewport)?;
        let x_scale = axis_scale(&self.options.x_axis, area.left, area.right)?;
        let y_scale = axis_scale(&self.options.y_axis, area.bottom, area.top)?;

        let mut frame = RenderFrame::new(viewport);
        self.push_title(&mut frame);
        self.push_x_axis(&mut frame, area, x_scale)?;
        self.push_y_axis(&mut frame, area, y_scale)?;

        let mut drawn = 0usize;
        for point in points {
            let cx = x_scale.domain_to_pixel(point.x)?;
            let cy = y_scale.domain_to_pixel(point.y)?;
            // Points outside the fixed range stay in the point set but are clipped here.
            if cx < area.left || cx > area.right || cy < area.top || cy > area.bottom {
                continue;
            }
            frame.circles.push(CirclePrimitive::new(
                cx,
                cy,
                self.options.point_radius_px,
                point.colors.fill,
                point.colors.border,
            ));
            drawn += 1;
        }

        let context = PluginContext {
            viewport,
            plot_area: area,
            points_len: drawn,
        };
        for plugin in &self.plugins {
            plugin.after_draw(context, &mut frame);
        }

        Ok(frame)
    }

    fn push_title(&self, frame: &mut RenderFrame) {
        if self.options.title.is_empty() {
            return;
        }
        frame.texts.push(
            TextPrimitive::new(
                &self.options.title,
                f64::from(frame.viewport.width) / 2.0,
                self.style.inset_top_px / 2.0,
                self.style.title_font_size_px,
                self.style.text_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }

    fn push_x_axis(
        &self,
        frame: &mut RenderFrame,
        area: PlotArea,
        scale: LinearScale,
    ) -> QuadrantResult<()> {
        for tick in &self.options.x_axis.ticks {
            let x = scale.domain_to_pixel(tick.value)?;
            frame.lines.push(LinePrimitive::new(
                x,
                area.top,
                x,
                area.bottom,
                tick.grid.width,
                tick.grid.color,
            ));
            if !tick.label.is_empty() {
                frame.texts.push(
                    TextPrimitive::new(
                        &tick.label,
                        x,
                        area.bottom + self.style.tick_label_gap_px,
                        self.style.tick_font_size_px,
                        self.style.text_color,
                        TextHAlign::Center,
                    )
                    .with_v_align(TextVAlign::Top),
                );
            }
        }
        if !self.options.x_axis.title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    &self.options.x_axis.title,
                    (area.left + area.right) / 2.0,
                    f64::from(frame.viewport.height) - self.style.tick_label_gap_px,
                    self.style.axis_title_font_size_px,
                    self.style.text_color,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Bottom),
            );
        }
        Ok(())
    }

    fn push_y_axis(
        &self,
        frame: &mut RenderFrame,
        area: PlotArea,
        scale: LinearScale,
    ) -> QuadrantResult<()> {
        for tick in &self.options.y_axis.ticks {
            let y = scale.domain_to_pixel(tick.value)?;
            frame.lines.push(LinePrimitive::new(
                area.left,
                y,
                area.right,
                y,
                tick.grid.width,
                tick.grid.color,
            ));
            if !tick.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    &tick.label,
                    area.left - self.style.tick_label_gap_px,
                    y,
                    self.style.tick_font_size_px,
                    self.style.text_color,
                    TextHAlign::Right,
                ));
            }
        }
        if !self.options.y_axis.title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    &self.options.y_axis.title,
                    self.style.tick_label_gap_px,
                    (area.top + area.bottom) / 2.0,
                    self.style.axis_title_font_size_px,
                    self.style.text_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle),
            );
        }
        Ok(())
    }
}

fn axis_scale(axis: &AxisOptions, pixel_start: f64, pixel_end: f64) -> QuadrantResult<LinearScale> {
    LinearScale::new(axis.min, axis.max, pixel_start, pixel_end)
}
