use skiff_trace::metadata::Value;
use skiff_trace::{Exception, Metadata, TraceFrame, Traceback};

/// Innermost interpreter frame, where the failure actually happens.
fn divide(dividend: i64, divisor: i64) -> Result<i64, Exception> {
    if divisor == 0 {
        let mut user_info = Metadata::new();
        user_info.insert("dividend", dividend);
        user_info.insert("divisor", divisor);

        let mut raised = Exception::with_user_info("RuntimeError", "division by zero", user_info);
        raised.add_frame_with_filename("divide", 10, "math.skf");
        Err(raised)
    } else {
        Ok(dividend / divisor)
    }
}

/// Middle frame, which records its call site and keeps the same exception moving.
fn compute() -> Result<i64, Exception> {
    divide(1, 0).map_err(|mut raised| {
        raised.add_frame("compute", 42);
        raised
    })
}

#[test]
fn division_failure_reaches_the_handler_with_its_full_route() {
    let raised = compute().expect_err("division by zero should propagate");

    let frames = raised.traceback().frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].function(), "divide");
    assert_eq!(frames[0].line(), 10);
    assert_eq!(frames[0].filename(), Some("math.skf"));
    assert_eq!(frames[1].function(), "compute");
    assert_eq!(frames[1].line(), 42);
    assert_eq!(frames[1].filename(), Some("math.skf"));
}

#[test]
fn rendered_diagnostic_matches_line_for_line() {
    let raised = compute().expect_err("division by zero should propagate");

    assert_eq!(
        raised.render(),
        "division by zero\n  in divide (math.skf:10)\n  in compute (math.skf:42)"
    );
}

#[test]
fn handlers_read_the_payload_attached_at_the_failure_site() {
    let raised = compute().expect_err("division by zero should propagate");

    let user_info = raised.user_info().expect("payload should survive unwinding");
    assert_eq!(user_info.get("dividend"), Some(&Value::Integer(1)));
    assert_eq!(user_info.get("divisor"), Some(&Value::Integer(0)));
}

#[test]
fn frames_recorded_without_filenames_render_the_placeholder() {
    let mut raised = Exception::new("NameError", "undefined symbol 'x'");
    raised.add_frame("lookup", 7);

    let rendered = raised.render();
    assert!(rendered.contains(TraceFrame::UNKNOWN_FILENAME), "got {:?}", rendered);
}

#[test]
fn long_unwinds_keep_every_frame() {
    let mut raised = Exception::new("RecursionError", "call depth exceeded");
    for depth in 0..100 {
        raised.add_frame("recurse", depth);
    }

    assert_eq!(raised.traceback().len(), 100);
    assert_eq!(raised.render().lines().count(), 101);
}

#[test]
fn reporting_types_are_send_and_sync() {
    fn assert_send_and_sync<T: Send + Sync>() {}

    assert_send_and_sync::<Exception>();
    assert_send_and_sync::<Traceback>();
    assert_send_and_sync::<TraceFrame>();
    assert_send_and_sync::<Metadata>();
    assert_send_and_sync::<Value>();
}

#[test]
fn each_thread_owns_the_exceptions_it_raises() {
    let handles: Vec<_> = (0..4)
        .map(|thread_number| {
            std::thread::spawn(move || {
                let mut raised = Exception::new("RuntimeError", format!("failure {}", thread_number));
                raised.add_frame_with_filename("worker", thread_number, "pool.skf");
                raised
            })
        })
        .collect();

    for (thread_number, handle) in handles.into_iter().enumerate() {
        let raised = handle.join().unwrap();
        assert_eq!(raised.reason(), format!("failure {}", thread_number));
        assert_eq!(raised.traceback().len(), 1);
    }
}
