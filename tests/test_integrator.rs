use ode_steps::{Config, Error, Integrator, Method, Problem, SampleSink, TextSink, Trajectory};
use plotpy::{Curve, Plot};
use russell_lab::{Vector, approx_eq};
use russell_ode::{Method as OdeMethod, OdeSolver, Params, System};

const SAVE_FIGURE: bool = false;

// dy/dx = y - x over [0, 100] with y0 = 1 + 1e-8 and dx = 1.1; values printed with %.16le
#[rustfmt::skip]
const REFERENCE_LINES: [(Method, [&str; 3]); 3] = [
    (Method::Euler, [
        "1.1000000000000001e+00 2.1000000210000001e+00",
        "2.2000000000000002e+00 3.2000000441000003e+00",
        "1.0009999999999987e+02 2.0987263805824576e+21",
    ]),
    (Method::ModifiedEuler, [
        "1.1000000000000001e+00 2.1000000270500001e+00",
        "2.2000000000000002e+00 3.2000000731702500e+00",
        "1.0009999999999987e+02 2.1243277262697969e+31",
    ]),
    (Method::RungeKutta4, [
        "1.1000000000000001e+00 2.1000000298783750e+00",
        "2.2000000000000002e+00 3.2000000892717289e+00",
        "1.0009999999999987e+02 1.8091917868717287e+35",
    ]),
];

#[test]
fn test_default_scenario_output() {
    let config = Config::default();
    let integrator = Integrator::new(config.build_problem().unwrap());
    for (method, reference) in REFERENCE_LINES {
        let mut sink = TextSink::new(Vec::new());
        let count = integrator.run(method, config.dx, &mut sink).unwrap();
        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(count, 91);
        assert_eq!(lines.len(), 91);
        assert_eq!(lines[0], reference[0]);
        assert_eq!(lines[1], reference[1]);
        assert_eq!(lines[90], reference[2]);
    }
}

#[test]
fn test_step_count_boundary() {
    let config = Config {
        x0: 0.0,
        x1: 10.0,
        dx: 1.0,
        ..Config::default()
    };
    let integrator = Integrator::new(config.build_problem().unwrap());
    for method in Method::ALL {
        let trajectory = integrator.trajectory(method, config.dx).unwrap();
        assert_eq!(trajectory.len(), 11);
        assert_eq!(trajectory.xx[0], 1.0);
        assert_eq!(trajectory.last().unwrap().0, 11.0);
    }
}

#[test]
fn test_bad_step_size_is_rejected() {
    let integrator = Integrator::new(Config::default().build_problem().unwrap());
    let mut trajectory = Trajectory::new();
    for dx in [0.0, -1.1] {
        assert!(integrator.run(Method::Euler, dx, &mut trajectory).is_err());
    }
    assert!(trajectory.is_empty());
}

struct FailAfter {
    remaining: usize,
}

impl SampleSink for FailAfter {
    fn accept(&mut self, _x: f64, _y: f64) -> Result<(), Error> {
        if self.remaining == 0 {
            return Err(std::io::Error::other("sink closed").into());
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[test]
fn test_failing_sink_aborts_the_run() {
    let integrator = Integrator::new(Config::default().build_problem().unwrap());
    let mut sink = FailAfter { remaining: 5 };
    let res = integrator.run(Method::RungeKutta4, 1.1, &mut sink);
    assert!(matches!(res, Err(Error::Io(_))));
}

#[test]
fn test_runge_kutta_agrees_with_dopri() {
    // nonlinear equation without a closed-form solution
    let rhs = |x: f64, y: f64| f64::cos(x) - 0.5 * y * y;
    let (x0, x1, y0) = (0.0, 2.0, 1.0);

    let problem = Problem::from_fn(x0, x1, y0, rhs).unwrap();
    let integrator = Integrator::new(problem);
    let trajectory = integrator.trajectory(Method::RungeKutta4, 1.0 / 64.0).unwrap();
    let y_rk4 = trajectory.y_at(x1).unwrap();

    let params = Params::new(OdeMethod::DoPri8);
    let system = System::new(1, |f, x, y, _args: &mut u8| {
        f[0] = rhs(x, y[0]);
        Ok(())
    });
    let mut solver = OdeSolver::new(params, system).unwrap();
    let mut y = Vector::from(&[y0]);
    solver.solve(&mut y, x0, x1, None, &mut 0).unwrap();

    println!("y({}): rk4 = {}, dopri8 = {}", x1, y_rk4, y[0]);
    approx_eq(y_rk4, y[0], 1e-4);

    if SAVE_FIGURE {
        let mut curve = Curve::new();
        curve
            .set_label("Runge-Kutta")
            .set_line_style("None")
            .set_marker_style(".")
            .draw(&trajectory.xx, &trajectory.yy);
        let mut plot = Plot::new();
        plot.add(&curve)
            .grid_labels_legend("x", "y")
            .save("/tmp/ode_steps/test_runge_kutta_agrees_with_dopri.svg")
            .unwrap();
    }
}
