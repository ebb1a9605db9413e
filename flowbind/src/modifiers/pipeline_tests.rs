//! End-to-end pipelines mixing several modifiers.

#[cfg(test)]
mod tests {
    use crate::core::{identity, lift, lift_fallible, lift_maybe, value, BoxedOperation};
    use crate::fault::raise;
    use crate::modifiers::{fallible, trycatch, trycatch_handled, MAYBE};
    use crate::testing::Probe;
    use mockall::automock;
    use pretty_assertions::assert_eq;

    #[automock]
    trait Step {
        fn apply(&self, value: i32) -> i32;
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct NotEven;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ParseError {
        Empty,
        NotANumber(String),
    }

    fn add1(i: i32) -> i32 {
        i + 1
    }

    fn add2(i: i32) -> i32 {
        i + 2
    }

    fn add15(i: i32) -> i32 {
        i + 15
    }

    fn evens_only(i: i32) -> Option<i32> {
        (i % 2 == 0).then_some(i)
    }

    fn parse(text: &'static str) -> Result<i32, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        text.parse().map_err(|_| ParseError::NotANumber(text.to_string()))
    }

    #[test]
    fn test_maybe_filter_maybe_chain() {
        let pipeline = value(Some(12))
            >> MAYBE
            >> lift(add2)
            >> lift_maybe(evens_only)
            >> MAYBE
            >> lift(add2);

        assert_eq!(pipeline.run(), Some(16));
    }

    #[test]
    fn test_odd_intermediate_result_is_absent() {
        let pipeline = MAYBE >> lift(add15) >> lift_maybe(evens_only) >> MAYBE >> lift(add1);

        assert_eq!(pipeline.call(Some(12)), None);
        assert_eq!(pipeline.call(Some(13)), Some(29));
        assert_eq!(pipeline.call(None::<i32>), None);
    }

    #[test]
    fn test_short_circuit_never_calls_mocked_step() {
        let mut step = MockStep::new();
        step.expect_apply().never();

        let pipeline = MAYBE >> lift(move |x: i32| step.apply(x));
        assert_eq!(pipeline.call(None::<i32>), None);
    }

    #[test]
    fn test_present_calls_mocked_step_once() {
        let mut step = MockStep::new();
        step.expect_apply()
            .withf(|value| *value == 20)
            .times(1)
            .returning(|value| value * 2);

        let pipeline = value(Some(20)) >> MAYBE >> lift(move |x: i32| step.apply(x));
        assert_eq!(pipeline.run(), Some(40));
    }

    #[test]
    fn test_modifier_right_after_modifier() {
        let pipeline = MAYBE
            >> trycatch::<NotEven>()
            >> lift(|x: i32| if x % 2 == 0 { x } else { raise(NotEven) });

        assert_eq!(pipeline.call(Some(4)), Some(4));
        assert_eq!(pipeline.call(Some(3)), None);
        assert_eq!(pipeline.call(None::<i32>), None);
    }

    #[test]
    fn test_trycatch_inside_fallible_stays_a_value() {
        let pipeline = fallible::<ParseError>()
            >> lift(add1)
            >> trycatch::<NotEven>()
            >> lift(|x: i32| if x % 2 == 0 { x } else { raise(NotEven) });

        let ok: Result<Option<i32>, ParseError> = pipeline.call(Ok(1));
        assert_eq!(ok, Ok(Some(2)));
        assert_eq!(pipeline.call(Ok(2)), Ok(None));
        assert_eq!(pipeline.call(Err(ParseError::Empty)), Err(ParseError::Empty));
    }

    #[test]
    fn test_fallible_parsing_pipeline() {
        let probe = Probe::new();
        let pipeline = lift_fallible(parse) >> fallible::<ParseError>() >> lift(probe.tap(add1));

        assert_eq!(pipeline.call("41"), Ok(42));
        assert_eq!(pipeline.call(""), Err(ParseError::Empty));
        assert_eq!(
            pipeline.call("forty"),
            Err(ParseError::NotANumber("forty".to_string()))
        );
        assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn test_handled_scope_wraps_declared_errors() {
        let pipeline = trycatch_handled::<NotEven, _, _>(|_| ParseError::Empty)
            >> lift(|x: i32| if x % 2 == 0 { x } else { raise(NotEven) })
            >> lift(|x: i32| if x == 0 { String::new() } else { x.to_string() })
            >> lift_fallible(|s: String| -> Result<i32, ParseError> {
                if s.is_empty() {
                    return Err(ParseError::NotANumber(s));
                }
                s.parse::<i32>().map_err(|_| ParseError::NotANumber(s))
            });

        let result: Result<Result<i32, ParseError>, ParseError> = pipeline.call(8);
        assert_eq!(result, Ok(Ok(8)));
        assert_eq!(
            pipeline.call(0),
            Ok(Err(ParseError::NotANumber(String::new())))
        );
        assert_eq!(pipeline.call(7), Err(ParseError::Empty));
    }

    #[test]
    fn test_reusable_segment_is_a_single_step() {
        let maybe_add15 = MAYBE >> lift(add15);
        let pipeline = value(Some(1)) >> maybe_add15 >> lift(|x: Option<i32>| x.unwrap_or(0));

        assert_eq!(pipeline.run(), 16);
    }

    #[test]
    fn test_identity_inside_scope() {
        let pipeline = MAYBE >> identity() >> lift(add1);
        assert_eq!(pipeline.call(Some(1)), Some(2));
    }

    #[test]
    fn test_boxed_scoped_pipeline() {
        let mut stored: Vec<BoxedOperation<Option<i32>, Option<i32>>> = Vec::new();
        stored.push((MAYBE >> lift(add2) >> lift_maybe(evens_only)).into_boxed::<Option<i32>>());
        stored.push(Box::new(|x: Option<i32>| x));

        assert_eq!(stored[0](Some(2)), Some(4));
        assert_eq!(stored[0](Some(1)), None);
        assert_eq!(stored[1](Some(1)), Some(1));
    }
}
