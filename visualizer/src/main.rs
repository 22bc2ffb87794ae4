use base64::{engine::general_purpose::STANDARD, Engine as _};
use geocore::analysis::AnalysisOutcome;
use geocore::charts::{ChartKind, ChartSpec};
use geocore::prelude::{ModuleKind, ModuleView};
use geocore::scenario::{RecoveryProjection, ScenarioInputs};
use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, slider, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Task, Theme,
};
use serde::Deserialize;
use serde_json::json;
use std::{f32::consts::PI, time::Duration};

const BRIDGE_URL: &str = "http://127.0.0.1:9000";

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "GeoInsight Pro: Satellite AI Analysis".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    active: ModuleKind,
    page: Option<ModuleView>,
    conservation: f64,
    emission_reduction: f64,
    projection: RecoveryProjection,
    image_path: String,
    analysis: Option<AnalysisOutcome>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    StatusFetched(Result<StatusPayload, String>),
    ModuleSelected(ModuleKind),
    PageFetched(Result<ModuleView, String>),
    ConservationChanged(f64),
    EmissionReductionChanged(f64),
    SliderReleased,
    ProjectionFetched(Result<RecoveryProjection, String>),
    ImagePathChanged(String),
    SubmitAnalysis,
    AnalysisFinished(Result<AnalysisOutcome, String>),
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let defaults = ScenarioInputs::default();
        (
            Visualizer {
                active: ModuleKind::ImageClassification,
                page: None,
                conservation: f64::from(defaults.conservation),
                emission_reduction: f64::from(defaults.emission_reduction),
                projection: defaults.project(),
                image_path: String::new(),
                analysis: None,
                status: "Waiting for dashboard bridge...".into(),
                history: Vec::new(),
            },
            Task::perform(
                fetch_page(ModuleKind::ImageClassification),
                Message::PageFetched,
            ),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_status(), Message::StatusFetched),
            Message::StatusFetched(Ok(payload)) => {
                state.status = format!(
                    "Model {} | analyses {} | fallbacks {}",
                    payload.model, payload.analyses_completed, payload.fallbacks_served
                );
                Task::none()
            }
            Message::StatusFetched(Err(err)) => {
                state.status = format!("Bridge error: {err}");
                Task::none()
            }
            Message::ModuleSelected(kind) => {
                state.active = kind;
                Task::perform(fetch_page(kind), Message::PageFetched)
            }
            Message::PageFetched(Ok(view)) => {
                if let Some(panel) = &view.simulator {
                    state.conservation = f64::from(panel.conservation_default);
                    state.emission_reduction = f64::from(panel.emission_reduction_default);
                    state.projection = panel.default_projection;
                }
                state.push_history(format!("Loaded module: {}", view.title));
                state.page = Some(view);
                Task::none()
            }
            Message::PageFetched(Err(err)) => {
                state.status = format!("Page error: {err}");
                Task::none()
            }
            Message::ConservationChanged(value) => {
                state.conservation = value;
                state.recompute_projection();
                Task::none()
            }
            Message::EmissionReductionChanged(value) => {
                state.emission_reduction = value;
                state.recompute_projection();
                Task::none()
            }
            Message::SliderReleased => Task::perform(
                fetch_projection(state.conservation as i64, state.emission_reduction as i64),
                Message::ProjectionFetched,
            ),
            Message::ProjectionFetched(Ok(projection)) => {
                state.projection = projection;
                Task::none()
            }
            Message::ProjectionFetched(Err(err)) => {
                state.status = format!("Simulation error: {err}");
                Task::none()
            }
            Message::ImagePathChanged(path) => {
                state.image_path = path;
                Task::none()
            }
            Message::SubmitAnalysis => {
                state.status = "Analyzing image with AI...".into();
                Task::perform(
                    submit_analysis(state.image_path.clone()),
                    Message::AnalysisFinished,
                )
            }
            Message::AnalysisFinished(Ok(outcome)) => {
                if outcome.is_fallback() {
                    state.push_history("Analysis fallback served".into());
                } else {
                    state.push_history("Analysis completed".into());
                }
                state.status = "Analysis finished".into();
                state.analysis = Some(outcome);
                Task::none()
            }
            Message::AnalysisFinished(Err(err)) => {
                state.status = format!("Analysis error: {err}");
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let nav_buttons = ModuleKind::ALL.iter().fold(
            Column::new().spacing(8),
            |col, &kind| {
                let label = if kind == state.active {
                    format!("> {}", kind.label())
                } else {
                    kind.label().to_string()
                };
                col.push(
                    button(text(label).size(14))
                        .on_press(Message::ModuleSelected(kind))
                        .padding(8),
                )
            },
        );

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let nav_column = column![
            text("GeoInsight Pro").size(26),
            text("Choose Analysis Module").size(14),
            nav_buttons,
            text(&state.status).size(12),
            text("Activity log").size(14),
            Container::new(scrollable(history_list).height(Length::Fixed(140.0))).padding(6),
        ]
        .spacing(12)
        .padding(16)
        .width(Length::Fixed(280.0));

        let content: Element<'_, Message> = match &state.page {
            None => text("Loading module...").size(18).into(),
            Some(view) => state.module_content(view),
        };

        let layout = row![nav_column, content]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn module_content<'a>(&'a self, view: &'a ModuleView) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(12)
            .push(text(view.title.clone()).size(22));

        if let Some(upload) = &view.upload {
            content = content
                .push(text(upload.help.clone()).size(14))
                .push(
                    text(format!(
                        "Accepted formats: {}",
                        upload.accepted_formats.join(", ")
                    ))
                    .size(12),
                )
                .push(
                    text_input("Path to satellite image", &self.image_path)
                        .on_input(Message::ImagePathChanged)
                        .padding(6),
                )
                .push(
                    button("Analyze image")
                        .on_press(Message::SubmitAnalysis)
                        .padding(10),
                );

            let analysis_text = match &self.analysis {
                Some(outcome) => outcome.text().to_string(),
                None => "No analysis yet".to_string(),
            };
            content = content.push(text("AI Analysis Results").size(16)).push(
                Container::new(scrollable(text(analysis_text).size(14)).height(Length::Fixed(260.0)))
                    .padding(6),
            );
        }

        for spec in &view.charts {
            content = content.push(chart_block(spec));
        }

        if let Some(panel) = &view.simulator {
            content = content
                .push(text("Environmental Scenario Simulator").size(18))
                .push(
                    text(format!(
                        "Conservation Effort Intensity: {:.0}",
                        self.conservation
                    ))
                    .size(14),
                )
                .push(
                    slider(
                        0.0..=f64::from(panel.conservation_max),
                        self.conservation,
                        Message::ConservationChanged,
                    )
                    .step(1.0)
                    .on_release(Message::SliderReleased),
                )
                .push(
                    text(format!(
                        "Carbon Emission Reduction (%): {:.0}",
                        self.emission_reduction
                    ))
                    .size(14),
                )
                .push(
                    slider(
                        0.0..=f64::from(panel.emission_reduction_max),
                        self.emission_reduction,
                        Message::EmissionReductionChanged,
                    )
                    .step(1.0)
                    .on_release(Message::SliderReleased),
                )
                .push(
                    text(format!(
                        "Projected Ecosystem Recovery Potential: {:.2}%",
                        self.projection.potential
                    ))
                    .size(18),
                )
                .push(
                    text(format!(
                        "{:+.2}% from baseline",
                        self.projection.delta_from_baseline
                    ))
                    .size(14),
                );
        }

        if !view.notes.is_empty() {
            let notes = view
                .notes
                .iter()
                .fold(Column::new().spacing(4), |col, note| {
                    col.push(text(format!("- {note}")).size(13))
                });
            content = content
                .push(text("Key Insights").size(16))
                .push(Container::new(notes).padding(6));
        }

        scrollable(content.padding(16).width(Length::Fill)).into()
    }

    fn recompute_projection(&mut self) {
        self.projection =
            ScenarioInputs::clamped(self.conservation as i64, self.emission_reduction as i64)
                .project();
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn chart_block(spec: &ChartSpec) -> Element<'_, Message> {
    let canvas = Canvas::new(ChartCanvas { spec: spec.clone() })
        .width(Length::Fill)
        .height(Length::Fixed(220.0));

    let legend = spec
        .rows
        .iter()
        .enumerate()
        .fold(Column::new().spacing(2), |col, (index, chart_row)| {
            col.push(
                text(format!("{}: {}", chart_row.label, chart_row.value)).size(11).color(
                    if spec.kind == ChartKind::Pie || spec.kind == ChartKind::Bar {
                        series_color(index)
                    } else {
                        Color::from_rgb(0.8, 0.8, 0.85)
                    },
                ),
            )
        });

    column![
        text(spec.title.clone()).size(16),
        canvas,
        text(format!("{} / {}", spec.x_label, spec.y_label)).size(11),
        legend,
    ]
    .spacing(6)
    .into()
}

async fn fetch_status() -> Result<StatusPayload, String> {
    let response = reqwest::get(format!("{BRIDGE_URL}/status"))
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<StatusPayload>()
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_page(kind: ModuleKind) -> Result<ModuleView, String> {
    let response = reqwest::get(format!("{BRIDGE_URL}/page/{}", kind.slug()))
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<ModuleView>()
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_projection(
    conservation: i64,
    emission_reduction: i64,
) -> Result<RecoveryProjection, String> {
    let response = reqwest::get(format!(
        "{BRIDGE_URL}/simulate?conservation={conservation}&emission_reduction={emission_reduction}"
    ))
    .await
    .map_err(|e| e.to_string())?;
    response
        .json::<RecoveryProjection>()
        .await
        .map_err(|e| e.to_string())
}

async fn submit_analysis(path: String) -> Result<AnalysisOutcome, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("reading {path}: {e}"))?;
    let payload = json!({ "image_base64": STANDARD.encode(bytes) });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{BRIDGE_URL}/analyze"))
        .json(&payload)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| "".into());
        return Err(format!("{}: {}", status, text));
    }
    response
        .json::<AnalysisOutcome>()
        .await
        .map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Deserialize)]
struct StatusPayload {
    #[serde(default)]
    model: String,
    #[serde(default)]
    analyses_completed: usize,
    #[serde(default)]
    fallbacks_served: usize,
}

fn series_color(index: usize) -> Color {
    match index % 5 {
        0 => Color::from_rgb(0.18, 0.72, 0.89),
        1 => Color::from_rgb(0.95, 0.55, 0.2),
        2 => Color::from_rgb(0.45, 0.82, 0.38),
        3 => Color::from_rgb(0.85, 0.35, 0.45),
        _ => Color::from_rgb(0.7, 0.55, 0.9),
    }
}

#[derive(Clone)]
struct ChartCanvas {
    spec: ChartSpec,
}

impl canvas::Program<Message> for ChartCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.07),
        );

        match self.spec.kind {
            ChartKind::Line => self.draw_series(&mut frame, bounds, false),
            ChartKind::Area => self.draw_series(&mut frame, bounds, true),
            ChartKind::Bar => self.draw_bars(&mut frame, bounds),
            ChartKind::Pie => self.draw_pie(&mut frame, bounds),
        }

        vec![frame.into_geometry()]
    }
}

impl ChartCanvas {
    fn draw_series(&self, frame: &mut Frame, bounds: Rectangle, filled: bool) {
        if self.spec.rows.len() < 2 {
            return;
        }

        let values: Vec<f32> = self.spec.rows.iter().map(|r| r.value as f32).collect();
        let min = values.iter().cloned().fold(f32::INFINITY, f32::min).min(0.0);
        let max = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let range = (max - min).max(1e-3);
        let step = bounds.width / (values.len() as f32 - 1.0);
        let plot = |i: usize, value: f32| {
            let x = i as f32 * step;
            let normalized = (value - min) / range;
            let y = bounds.height - normalized * (bounds.height - 10.0);
            Point::new(x, y)
        };

        if filled {
            let area = Path::new(|builder| {
                builder.move_to(Point::new(0.0, bounds.height));
                for (i, value) in values.iter().enumerate() {
                    builder.line_to(plot(i, *value));
                }
                builder.line_to(Point::new(bounds.width, bounds.height));
                builder.close();
            });
            frame.fill(&area, Color::from_rgba(0.18, 0.72, 0.89, 0.25));
        }

        let polyline = Path::new(|builder| {
            for (i, value) in values.iter().enumerate() {
                let point = plot(i, *value);
                if i == 0 {
                    builder.move_to(point);
                } else {
                    builder.line_to(point);
                }
            }
        });
        frame.stroke(
            &polyline,
            Stroke::default()
                .with_width(2.5)
                .with_color(series_color(0)),
        );
    }

    fn draw_bars(&self, frame: &mut Frame, bounds: Rectangle) {
        if self.spec.rows.is_empty() {
            return;
        }

        let max = self.spec.max_value().max(1e-3) as f32;
        let slot = bounds.width / self.spec.rows.len() as f32;
        let bar_width = slot * 0.6;

        for (index, chart_row) in self.spec.rows.iter().enumerate() {
            let height = (chart_row.value as f32 / max) * (bounds.height - 10.0);
            let x = index as f32 * slot + (slot - bar_width) / 2.0;
            frame.fill_rectangle(
                Point::new(x, bounds.height - height),
                Size::new(bar_width, height),
                series_color(index),
            );
        }
    }

    fn draw_pie(&self, frame: &mut Frame, bounds: Rectangle) {
        let total = self.spec.total() as f32;
        if total <= 0.0 {
            return;
        }

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 8.0;
        let mut start_angle = -PI / 2.0;

        for (index, chart_row) in self.spec.rows.iter().enumerate() {
            let sweep = (chart_row.value as f32 / total) * 2.0 * PI;
            let steps = 48;
            let sector = Path::new(|builder| {
                builder.move_to(center);
                for step in 0..=steps {
                    let angle = start_angle + sweep * (step as f32 / steps as f32);
                    builder.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }
                builder.close();
            });
            frame.fill(&sector, series_color(index));
            start_angle += sweep;
        }

        // Donut hole matching the source chart's 0.3 ratio.
        let hole = Path::new(|builder| builder.circle(center, radius * 0.3));
        frame.fill(&hole, Color::from_rgb(0.05, 0.05, 0.07));
    }
}
