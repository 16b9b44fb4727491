use super::util::*;

fn map() -> (ConversionContext, AnimationData) {
    (ConversionContext::default(), AnimationData::default())
}

#[test]
fn map_duration_and_delay() {
    let (ctx, mut animation) = map();
    let style_map = StyleMap::new(&ctx);

    let duration = parse_one(PropertyId::AnimationDuration, "500ms").expect("duration");
    style_map.map_animation_duration(&mut animation, &duration);
    assert_eq!(animation.duration, 0.5);

    let seconds = parse_one(PropertyId::AnimationDuration, "2s").expect("seconds");
    style_map.map_animation_duration(&mut animation, &seconds);
    assert_eq!(animation.duration, 2.0);

    let delay = parse_one(PropertyId::AnimationDelay, "-0.5s").expect("delay");
    style_map.map_animation_delay(&mut animation, &delay);
    assert_eq!(animation.delay, -0.5);

    style_map.map_animation_duration(&mut animation, &Value::Initial);
    assert_eq!(animation.duration, 0.0);
}

#[test]
fn map_iteration_count_and_name() {
    let (ctx, mut animation) = map();
    let style_map = StyleMap::new(&ctx);

    let infinite = parse_one(PropertyId::AnimationIterationCount, "infinite").expect("infinite");
    style_map.map_animation_iteration_count(&mut animation, &infinite);
    assert_eq!(animation.iteration_count, IterationCount::Infinite);

    let three = parse_one(PropertyId::AnimationIterationCount, "2.5").expect("count");
    style_map.map_animation_iteration_count(&mut animation, &three);
    assert_eq!(animation.iteration_count, IterationCount::Finite(2.5));

    let name = parse_one(PropertyId::AnimationName, "slide-in").expect("name");
    style_map.map_animation_name(&mut animation, &name);
    assert_eq!(animation.name.as_deref(), Some("slide-in"));

    let none = parse_one(PropertyId::AnimationName, "none").expect("none");
    style_map.map_animation_name(&mut animation, &none);
    assert_eq!(animation.name, None);
}

#[test]
fn map_direction_fill_play() {
    let (ctx, mut animation) = map();
    let style_map = StyleMap::new(&ctx);

    let direction = parse_one(PropertyId::AnimationDirection, "alternate-reverse").expect("direction");
    style_map.map_animation_direction(&mut animation, &direction);
    assert_eq!(animation.direction, AnimationDirection::AlternateReverse);

    let fill = parse_one(PropertyId::AnimationFillMode, "both").expect("fill");
    style_map.map_animation_fill_mode(&mut animation, &fill);
    assert_eq!(animation.fill_mode, AnimationFillMode::Both);

    let paused = parse_one(PropertyId::AnimationPlayState, "paused").expect("play state");
    style_map.map_animation_play_state(&mut animation, &paused);
    assert_eq!(animation.play_state, AnimationPlayState::Paused);

    style_map.map_animation_fill_mode(&mut animation, &Value::Initial);
    assert_eq!(animation.fill_mode, AnimationFillMode::None);
}

#[test]
fn map_transition_property() {
    let (ctx, mut animation) = map();
    let style_map = StyleMap::new(&ctx);

    let width = parse_one(PropertyId::TransitionProperty, "width").expect("width");
    style_map.map_animation_property(&mut animation, &width);
    assert_eq!(animation.property, TransitionTarget::Property(PropertyId::Width));

    let none = parse_one(PropertyId::TransitionProperty, "none").expect("none");
    style_map.map_animation_property(&mut animation, &none);
    assert_eq!(animation.property, TransitionTarget::None);

    style_map.map_animation_property(&mut animation, &Value::Initial);
    assert_eq!(animation.property, TransitionTarget::All);
}

#[test]
fn keyword_timing_functions_map_to_preset_curves() {
    let (ctx, mut animation) = map();
    let style_map = StyleMap::new(&ctx);

    let cases = [
        ("ease", Timing::EASE),
        ("linear", Timing::LINEAR),
        ("ease-in", Timing::EASE_IN),
        ("ease-out", Timing::EASE_OUT),
        ("ease-in-out", Timing::EASE_IN_OUT),
        ("step-start", Timing::STEP_START),
        ("step-end", Timing::STEP_END),
    ];
    for (text, expected) in cases {
        let value = parse_one(PropertyId::AnimationTimingFunction, text).expect("keyword timing");
        style_map.map_animation_timing_function(&mut animation, &value);
        assert_eq!(animation.timing, expected, "wrong curve for `{text}`");
    }
}

#[test]
fn step_middle_requires_permission() {
    let ctx = ConversionContext::default();
    let mut animation = AnimationData::default();
    let value = parse_one(PropertyId::AnimationTimingFunction, "step-middle").expect("step-middle");

    // Without permission it silently falls back to the initial curve.
    let strict = StyleMap::new(&ctx);
    style_map_apply(&strict, &mut animation, &value);
    assert_eq!(animation.timing, Timing::EASE);

    let mut permissive = StyleMap::new(&ctx);
    permissive.allows_step_middle = true;
    style_map_apply(&permissive, &mut animation, &value);
    assert_eq!(animation.timing, Timing::STEP_MIDDLE);
}

fn style_map_apply(map: &StyleMap<'_>, animation: &mut AnimationData, value: &Value) {
    map.map_animation_timing_function(animation, value);
}

#[test]
fn parametrized_timing_functions() {
    let (ctx, mut animation) = map();
    let style_map = StyleMap::new(&ctx);

    let bezier = parse_one(PropertyId::AnimationTimingFunction, "cubic-bezier(0.1, 0.2, 0.3, 0.4)").expect("bezier");
    style_map.map_animation_timing_function(&mut animation, &bezier);
    assert_eq!(
        animation.timing,
        Timing::CubicBezier {
            x1: 0.1,
            y1: 0.2,
            x2: 0.3,
            y2: 0.4
        }
    );

    let steps = parse_one(PropertyId::AnimationTimingFunction, "steps(4, start)").expect("steps");
    style_map.map_animation_timing_function(&mut animation, &steps);
    assert_eq!(
        animation.timing,
        Timing::Steps {
            steps: 4,
            position: StepPosition::Start
        }
    );

    style_map.map_animation_timing_function(&mut animation, &Value::Initial);
    assert_eq!(animation.timing, Timing::EASE);
}
