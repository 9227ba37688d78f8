use iced::{
    mouse,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke},
        column, row, slider, stack, text, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Task, Theme,
};
use wavecore::{CurveSampler, DrawingArea, ParamRange, WaveParams};

const GRAPH_HEIGHT: f32 = 200.0;
const STROKE_WIDTH: f32 = 7.0;
const GRADIENT_BANDS: usize = 64;
const GRADIENT_TOP: Color = Color::from_rgb(1.0, 0.176, 0.333);

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Tapered Waveform".into()
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    params: WaveParams,
}

#[derive(Debug, Clone)]
enum Message {
    ParamChanged(Param, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Param {
    Amplitude,
    Frequency,
    Phase,
}

impl Param {
    fn label(self) -> &'static str {
        match self {
            Param::Amplitude => "A",
            Param::Frequency => "k",
            Param::Phase => "t",
        }
    }

    fn range(self) -> ParamRange {
        match self {
            Param::Amplitude => ParamRange::AMPLITUDE,
            Param::Frequency => ParamRange::FREQUENCY,
            Param::Phase => ParamRange::PHASE,
        }
    }

    fn step(self) -> f64 {
        match self {
            Param::Amplitude => 0.01,
            Param::Frequency => 0.05,
            Param::Phase => 0.1,
        }
    }

    fn get(self, params: &WaveParams) -> f64 {
        match self {
            Param::Amplitude => params.amplitude,
            Param::Frequency => params.frequency,
            Param::Phase => params.phase,
        }
    }
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                params: WaveParams::default(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ParamChanged(param, value) => {
                let value = param.range().clamp(value);
                match param {
                    Param::Amplitude => state.params.amplitude = value,
                    Param::Frequency => state.params.frequency = value,
                    Param::Phase => state.params.phase = value,
                }
                log::debug!("{} -> {:.3}", param.label(), value);
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let graph = Canvas::new(WaveCanvas {
            params: state.params,
        })
        .width(Length::Fill)
        .height(Length::Fixed(GRAPH_HEIGHT));

        let sliders = [Param::Amplitude, Param::Frequency, Param::Phase]
            .into_iter()
            .fold(column![].spacing(12).padding(16), |col, param| {
                col.push(param_slider(param, param.get(&state.params)))
            });

        let content = column![graph, sliders]
            .spacing(20)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        let backdrop = Canvas::new(Backdrop)
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(stack![
            backdrop,
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_y(Length::Fill)
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

fn param_slider(param: Param, value: f64) -> Element<'static, Message> {
    let range = param.range();
    row![
        text(param.label()).size(18).width(Length::Fixed(24.0)),
        slider(range.min..=range.max, value, move |v| {
            Message::ParamChanged(param, v)
        })
        .step(param.step())
        .width(Length::Fill),
        text(format!("{value:.2}")).size(14).width(Length::Fixed(56.0)),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// Area-local polyline for the current parameters, empty when the area is
/// degenerate (e.g. during the first layout pass).
fn curve_points(params: &WaveParams, width: f32, height: f32) -> Vec<Point> {
    let sampler = CurveSampler::default();
    let area = DrawingArea::new(f64::from(width), f64::from(height));
    match sampler.trace(params, &area) {
        Ok(points) => points
            .into_iter()
            .map(|p| Point::new(p.x as f32, p.y as f32))
            .collect(),
        Err(err) => {
            log::debug!("skipping waveform draw: {err}");
            Vec::new()
        }
    }
}

/// Linear blend from the gradient's top color to black at `t` in [0, 1].
fn gradient_color(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let keep = 1.0 - t;
    Color::from_rgb(GRADIENT_TOP.r * keep, GRADIENT_TOP.g * keep, GRADIENT_TOP.b * keep)
}

#[derive(Clone)]
struct WaveCanvas {
    params: WaveParams,
}

impl canvas::Program<Message> for WaveCanvas {
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
        let points = curve_points(&self.params, bounds.width, bounds.height);

        if let Some((first, rest)) = points.split_first() {
            let path = Path::new(|builder| {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
            });

            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.8))
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
struct Backdrop;

impl canvas::Program<Message> for Backdrop {
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
        let band_height = bounds.height / GRADIENT_BANDS as f32;

        for band in 0..GRADIENT_BANDS {
            let t = band as f32 / (GRADIENT_BANDS - 1) as f32;
            frame.fill_rectangle(
                Point::new(0.0, band as f32 * band_height),
                iced::Size::new(bounds.width, band_height + 1.0),
                gradient_color(t),
            );
        }

        vec![frame.into_geometry()]
    }
}
