//! Integration tests for the painter, the display list, and the paint worklet scope.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use notch_css::paint::{draw, resolve_color};
use notch_css::properties::{
    BORDER_RADIUS_REVERSE, BORDER_RADIUS_REVERSE_COLOR, BORDER_RADIUS_REVERSE_TOP_LEFT,
    INPUT_PROPERTIES,
};
use notch_css::{
    BorderRadiusReversePainter, BoxGeometry, ColorValue, Corner, DisplayCommand, DisplayList,
    PaintDefinition, PaintError, PaintRenderingContext2D, PaintWorkletGlobalScope,
    StylePropertyMap, compute_properties, fit,
};

const RED: ColorValue = ColorValue::rgba(255, 0, 0, 255);

fn props(radius: &str, color: &str) -> StylePropertyMap {
    StylePropertyMap::new()
        .with(BORDER_RADIUS_REVERSE, radius)
        .with(BORDER_RADIUS_REVERSE_COLOR, color)
}

fn cutout(x: f64, y: f64, rx: f64, ry: f64) -> Vec<DisplayCommand> {
    vec![
        DisplayCommand::Save,
        DisplayCommand::BeginPath,
        DisplayCommand::Ellipse {
            x,
            y,
            radius_x: rx,
            radius_y: ry,
            rotation: 0.0,
            start_angle: 0.0,
            end_angle: TAU,
        },
        DisplayCommand::Clip,
        DisplayCommand::ClearRect {
            x: x - rx,
            y: y - ry,
            width: rx * 2.0,
            height: ry * 2.0,
        },
        DisplayCommand::Restore,
    ]
}

#[test]
fn test_paint_20px_in_100_square() {
    let mut list = DisplayList::new();
    BorderRadiusReversePainter
        .paint(&mut list, BoxGeometry::new(100.0, 100.0), &props("20px", "red"))
        .unwrap();

    let mut expected = vec![
        DisplayCommand::SetFillStyle { color: RED },
        DisplayCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        },
    ];
    expected.extend(cutout(0.0, 0.0, 20.0, 20.0));
    expected.extend(cutout(100.0, 0.0, 20.0, 20.0));
    expected.extend(cutout(100.0, 100.0, 20.0, 20.0));
    expected.extend(cutout(0.0, 100.0, 20.0, 20.0));

    assert_eq!(list.commands(), expected.as_slice());
    assert_eq!(list.save_depth(), 0);
}

#[test]
fn test_paint_uses_fitted_radii() {
    let mut list = DisplayList::new();
    BorderRadiusReversePainter
        .paint(&mut list, BoxGeometry::new(100.0, 50.0), &props("60px 60px", "#000"))
        .unwrap();

    let ellipses: Vec<(f64, f64)> = list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::Ellipse {
                radius_x, radius_y, ..
            } => Some((*radius_x, *radius_y)),
            _ => None,
        })
        .collect();

    assert_eq!(ellipses.len(), 4);
    for (rx, ry) in ellipses {
        assert!((rx - 50.0).abs() < 1e-9);
        assert!((ry - 25.0).abs() < 1e-9);
    }
}

#[test]
fn test_paint_without_color_keeps_default_fill() {
    let props = StylePropertyMap::new().with(BORDER_RADIUS_REVERSE, "10px");
    let mut list = DisplayList::new();
    BorderRadiusReversePainter
        .paint(&mut list, BoxGeometry::new(40.0, 40.0), &props)
        .unwrap();

    assert!(matches!(
        list.commands().first(),
        Some(DisplayCommand::FillRect { .. })
    ));
}

#[test]
fn test_paint_with_invalid_color_keeps_default_fill() {
    let mut list = DisplayList::new();
    BorderRadiusReversePainter
        .paint(&mut list, BoxGeometry::new(40.0, 40.0), &props("10px", "not-a-color"))
        .unwrap();

    assert!(
        !list
            .commands()
            .iter()
            .any(|command| matches!(command, DisplayCommand::SetFillStyle { .. }))
    );
}

#[test]
fn test_paint_missing_parameters_draws_nothing() {
    let mut list = DisplayList::new();
    let result = BorderRadiusReversePainter.paint(
        &mut list,
        BoxGeometry::new(40.0, 40.0),
        &StylePropertyMap::new().with(BORDER_RADIUS_REVERSE_COLOR, "red"),
    );

    assert_eq!(
        result,
        Err(PaintError::MissingParameters {
            corner: Corner::TopLeft
        })
    );
    assert!(list.is_empty());
}

#[test]
fn test_resolve_color() {
    assert_eq!(resolve_color(&props("1px", "rgb(255, 0, 0)")), Some(RED));
    assert_eq!(resolve_color(&props("1px", "bogus")), None);
    assert_eq!(resolve_color(&StylePropertyMap::new()), None);
}

#[test]
fn test_draw_cuts_corners_in_fixed_order() {
    let radii = fit(
        &compute_properties(&props("1px 2px 3px 4px", "red")).unwrap(),
        BoxGeometry::new(10.0, 20.0),
    );
    let mut list = DisplayList::new();
    draw(&mut list, BoxGeometry::new(10.0, 20.0), &radii, None);

    let centers: Vec<(f64, f64)> = list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::Ellipse { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(
        centers,
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 20.0), (0.0, 20.0)]
    );
}

#[test]
fn test_display_list_replay_reproduces_commands() {
    let mut original = DisplayList::new();
    BorderRadiusReversePainter
        .paint(&mut original, BoxGeometry::new(30.0, 30.0), &props("5px", "blue"))
        .unwrap();

    let mut copy = DisplayList::new();
    original.replay(&mut copy);
    assert_eq!(copy, original);
}

#[test]
fn test_save_depth_ignores_unmatched_restore() {
    let mut list = DisplayList::new();
    list.restore();
    list.save();
    list.save();
    list.restore();
    assert_eq!(list.save_depth(), 1);
    assert_eq!(list.len(), 4);
}

// === PaintWorkletGlobalScope ===

#[test]
fn test_builtin_scope_registers_border_radius_reverse() {
    let scope = PaintWorkletGlobalScope::with_builtin_painters();
    assert_eq!(scope.names(), vec!["border-radius-reverse"]);

    let definition = scope.definition("border-radius-reverse").unwrap();
    assert_eq!(definition.input_properties(), &INPUT_PROPERTIES);
}

#[test]
fn test_register_paint_rejects_empty_name() {
    let mut scope = PaintWorkletGlobalScope::new();
    assert_eq!(
        scope.register_paint("", BorderRadiusReversePainter),
        Err(PaintError::EmptyPaintName)
    );
}

#[test]
fn test_register_paint_rejects_duplicate() {
    let mut scope = PaintWorkletGlobalScope::with_builtin_painters();
    assert_eq!(
        scope.register_paint("border-radius-reverse", BorderRadiusReversePainter),
        Err(PaintError::DuplicatePaintName(
            "border-radius-reverse".to_string()
        ))
    );
}

#[test]
fn test_invoke_unknown_paint() {
    let scope = PaintWorkletGlobalScope::new();
    let mut list = DisplayList::new();
    assert_eq!(
        scope.invoke(
            "checkerboard",
            &mut list,
            BoxGeometry::new(1.0, 1.0),
            &StylePropertyMap::new()
        ),
        Err(PaintError::UnknownPaint("checkerboard".to_string()))
    );
}

/// Records which properties it was shown.
struct PropertySpy {
    seen: Rc<RefCell<Vec<String>>>,
}

impl PaintDefinition for PropertySpy {
    fn input_properties(&self) -> &[&'static str] {
        &["--wanted"]
    }

    fn paint(
        &self,
        context: &mut dyn PaintRenderingContext2D,
        geometry: BoxGeometry,
        props: &StylePropertyMap,
    ) -> Result<(), PaintError> {
        let mut names: Vec<String> = props.iter().map(|(name, _)| name.to_string()).collect();
        names.sort();
        *self.seen.borrow_mut() = names;
        context.fill_rect(0.0, 0.0, geometry.width, geometry.height);
        Ok(())
    }
}

#[test]
fn test_invoke_shows_only_input_properties() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut scope = PaintWorkletGlobalScope::new();
    scope
        .register_paint(
            "spy",
            PropertySpy {
                seen: Rc::clone(&seen),
            },
        )
        .unwrap();

    let props = StylePropertyMap::new()
        .with("--wanted", "1")
        .with("--unwanted", "2");
    let mut list = DisplayList::new();
    scope
        .invoke("spy", &mut list, BoxGeometry::new(2.0, 3.0), &props)
        .unwrap();

    assert_eq!(*seen.borrow(), vec!["--wanted".to_string()]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_invoke_builtin_through_scope() {
    let scope = PaintWorkletGlobalScope::with_builtin_painters();
    let props = props("20px", "red").with(BORDER_RADIUS_REVERSE_TOP_LEFT, "5px");
    let mut list = DisplayList::new();
    scope
        .invoke(
            BorderRadiusReversePainter::NAME,
            &mut list,
            BoxGeometry::new(100.0, 100.0),
            &props,
        )
        .unwrap();

    assert_eq!(list.len(), 26);
    assert!(list.commands().contains(&DisplayCommand::ClearRect {
        x: -5.0,
        y: -5.0,
        width: 10.0,
        height: 10.0,
    }));
}
