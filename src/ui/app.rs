//! Main application for the Omok GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::session::Session;
use super::theme::*;
use crate::config::AppConfig;
use crate::{get_player_label, GameOutcome, Stone};

const RULES: [&str; 4] = [
    "Black moves first",
    "Five stones in a row horizontally, vertically or diagonally wins",
    "Click an empty cell to place a stone",
    "The last move is highlighted",
];

/// Main Omok application
pub struct OmokApp {
    session: Session,
    board_view: BoardView,
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            session: Session::new(),
            board_view: BoardView::new(config.show_coordinates),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(SIDE_PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                match self.session.state().outcome() {
                    GameOutcome::InProgress => self.render_turn_card(ui),
                    outcome => self.render_result_card(ui, outcome),
                }
                ui.add_space(10.0);

                self.render_moves_card(ui);
                ui.add_space(10.0);

                self.render_rules_card(ui);

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("OMOK").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row wins").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Draw a stone icon for `stone`
    fn stone_icon(ui: &mut egui::Ui, stone: Stone, radius: f32) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(radius * 2.0 + 4.0), egui::Sense::hover());
        let fill = if stone == Stone::Black { BLACK_STONE } else { WHITE_STONE };
        ui.painter().circle_filled(rect.center(), radius, fill);
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let turn = self.session.state().current_player();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CURRENT TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                Self::stone_icon(ui, turn, 20.0);
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(get_player_label(turn).to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let secs = self.session.move_timer.elapsed().as_secs_f32();
                    ui.label(RichText::new(format!("{secs:.1}s")).size(12.0).color(TIMER_NORMAL));
                });
            });
        });
    }

    fn render_result_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let total = self.session.state().move_count();
        Frame::new()
            .fill(RESULT_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    match outcome {
                        GameOutcome::Win(winner) => {
                            ui.label(RichText::new("VICTORY!").size(18.0).strong().color(WIN_HIGHLIGHT));
                            ui.add_space(8.0);
                            ui.horizontal(|ui| {
                                Self::stone_icon(ui, winner, 14.0);
                                ui.label(
                                    RichText::new(format!("{} wins", get_player_label(winner)))
                                        .size(16.0)
                                        .color(TEXT_PRIMARY),
                                );
                            });
                        }
                        _ => {
                            ui.label(RichText::new("DRAW GAME").size(18.0).strong().color(DRAW_HIGHLIGHT));
                        }
                    }

                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("Total moves: {total}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if Self::button(ui, "New Game") {
                        self.session.reset();
                    }
                });
            });
    }

    fn render_moves_card(&mut self, ui: &mut egui::Ui) {
        let moves = self.session.state().move_count();
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
                    ui.label(RichText::new(format!("{moves:03}")).size(24.0).strong().color(TEXT_PRIMARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if Self::button(ui, "Reset") {
                        self.session.reset();
                    }
                });
            });
        });
    }

    fn render_rules_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GAME RULES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for rule in RULES {
                ui.label(RichText::new(format!("- {rule}")).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Styled clickable label, returns true when clicked
    fn button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).strong().color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.session.state(),
                    self.session.winning_line(),
                );

                if let Some(pos) = clicked {
                    // Rejections are already reported through the session message
                    let _ = self.session.click(pos);
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.session.reset();
        }
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the turn timer ticking
        if !self.session.state().is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
