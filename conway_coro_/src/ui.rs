// ui.rs - Viewport onto the live set, controls, and click-to-toggle

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life::Cell;
use life::patterns::PATTERNS;
use tracing::{error, info};

use crate::{GameOfLife, GameOfLifeInterface};

/// Maps a pointer offset from the grid's top-left corner to a cell.
///
/// The offset is divided by the cell pitch and floored, then shifted by the
/// viewport origin. Offsets outside the visible `cols x rows` window give `None`.
pub fn cell_at(offset: Vec2, pitch: f32, origin: Cell, cols: usize, rows: usize) -> Option<Cell> {
    if offset.x < 0.0 || offset.y < 0.0 || pitch <= 0.0 {
        return None;
    }
    let col = (offset.x / pitch).floor() as usize;
    let row = (offset.y / pitch).floor() as usize;
    if col >= cols || row >= rows {
        return None;
    }
    origin.offset(col as i64, row as i64)
}

impl GameOfLife {
    fn step_once(&mut self) {
        if let Err(err) = self.update_generation() {
            error!(%err, "generation failed, pausing");
            self.is_running = false;
        }
    }

    fn pan(&mut self, dx: i64, dy: i64) {
        if let Some(origin) = self.origin.offset(dx, dy) {
            self.origin = origin;
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step_once();
            self.last_update = Instant::now();
            ctx.request_repaint(); // Ensure continuous updates
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Async Conway's Game of Life (Coroutine Neighbor Counts)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                    info!(running = self.is_running, generation = self.generation, "toggled run");
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.step_once();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                // Show current colors
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            // Viewport panning
            let (cols, rows) = (self.config.view_cols, self.config.view_rows);
            let step_x = (cols / 4).max(1) as i64;
            let step_y = (rows / 4).max(1) as i64;
            ui.horizontal(|ui| {
                ui.label("View:");
                if ui.button("⬅").clicked() { self.pan(-step_x, 0); }
                if ui.button("➡").clicked() { self.pan(step_x, 0); }
                if ui.button("⬆").clicked() { self.pan(0, -step_y); }
                if ui.button("⬇").clicked() { self.pan(0, step_y); }
                if ui.button("Home").clicked() { self.origin = Cell::new(0, 0); }
                ui.label(format!("Top-left: ({}, {})", self.origin.x, self.origin.y));
            });

            ui.separator();

            ui.label("🚀 Neighbor counts are split across async coroutines and merged by addition!");
            ui.label("Click cells to toggle them alive/dead. Use Start/Pause to run the simulation.");

            ui.separator();

            // Draw the visible window of the plane
            let box_size = self.config.box_size;
            let pitch = self.config.pitch();

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(pitch * cols as f32 - self.config.spacing, pitch * rows as f32 - self.config.spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for row in 0..rows {
                for col in 0..cols {
                    let x = start_pos.x + col as f32 * pitch;
                    let y = start_pos.y + row as f32 * pitch;

                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let alive = self
                        .origin
                        .offset(col as i64, row as i64)
                        .is_some_and(|cell| self.live.contains(&cell));
                    let cell_color = if alive { self.live_color } else { self.dead_color };

                    painter.rect_filled(rect, 1.0, cell_color);

                    // Draw subtle border
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            // Handle clicking (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(cell) = cell_at(pos - start_pos, pitch, self.origin, cols, rows) {
                        self.toggle_cell(cell);
                    }
                }
            }

            ui.separator();

            // Statistics
            let visible = (0..rows as i64)
                .flat_map(|row| (0..cols as i64).map(move |col| (col, row)))
                .filter_map(|(col, row)| self.origin.offset(col, row))
                .filter(|cell| self.live.contains(cell))
                .count();

            ui.horizontal(|ui| {
                ui.label(format!("Population: {}", self.live.len()));
                ui.label(format!("Visible: {}", visible));
                if let Some((min, max)) = self.live.bounds() {
                    ui.label(format!("Bounds: ({}, {}) .. ({}, {})", min.x, min.y, max.x, max.y));
                }
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
