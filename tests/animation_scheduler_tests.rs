use dashboard_charts::animation::{
    AnimationPhase, AnimationScheduler, ManualClock, RevealProgress, TickStatus,
};

fn recording_scheduler(clock: &ManualClock) -> AnimationScheduler<ManualClock, Vec<f64>> {
    AnimationScheduler::new(clock.clone())
}

#[test]
fn progress_follows_clock_and_completes_at_one() {
    let clock = ManualClock::new();
    let mut scheduler = recording_scheduler(&clock);
    let mut seen = Vec::new();

    let handle = scheduler.start(1_000.0, |seen: &mut Vec<f64>, progress| {
        seen.push(progress);
        Ok(())
    });
    assert!(seen.is_empty());
    assert!(handle.is_running());

    let mut statuses = Vec::new();
    for now in [0.0, 250.0, 250.0, 600.0, 1_200.0] {
        clock.set_ms(now);
        statuses.push(scheduler.tick(&mut seen).expect("tick"));
    }

    assert_eq!(seen, vec![0.0, 0.25, 0.25, 0.6, 1.0]);
    assert_eq!(statuses[1], TickStatus::Running { progress: 0.25 });
    assert_eq!(statuses[4], TickStatus::Completed);
    assert_eq!(handle.phase(), AnimationPhase::Completed);
    assert!(!scheduler.is_active());

    clock.set_ms(2_000.0);
    assert_eq!(scheduler.tick(&mut seen).expect("idle tick"), TickStatus::Idle);
    assert_eq!(seen.len(), 5);
}

#[test]
fn cancel_stops_further_callbacks() {
    let clock = ManualClock::new();
    let mut scheduler = recording_scheduler(&clock);
    let mut seen = Vec::new();

    let handle = scheduler.start(1_000.0, |seen: &mut Vec<f64>, progress| {
        seen.push(progress);
        Ok(())
    });
    clock.set_ms(100.0);
    scheduler.tick(&mut seen).expect("tick");

    assert!(scheduler.cancel());
    assert!(handle.is_cancelled());
    assert!(!scheduler.cancel());

    clock.set_ms(500.0);
    assert_eq!(scheduler.tick(&mut seen).expect("tick"), TickStatus::Idle);
    assert_eq!(seen, vec![0.1]);
}

#[test]
fn starting_again_supersedes_previous_animation() {
    let clock = ManualClock::new();
    let mut scheduler: AnimationScheduler<ManualClock, Vec<(u8, f64)>> =
        AnimationScheduler::new(clock.clone());
    let mut seen = Vec::new();

    let first = scheduler.start(1_000.0, |seen: &mut Vec<(u8, f64)>, progress| {
        seen.push((1, progress));
        Ok(())
    });
    clock.set_ms(200.0);
    scheduler.tick(&mut seen).expect("tick");

    let second = scheduler.start(400.0, |seen: &mut Vec<(u8, f64)>, progress| {
        seen.push((2, progress));
        Ok(())
    });
    assert!(first.is_cancelled());
    assert_ne!(first.id(), second.id());

    clock.set_ms(300.0);
    assert_eq!(
        scheduler.tick_scheduled(&first, &mut seen).expect("stale tick"),
        TickStatus::Idle
    );
    assert_eq!(
        scheduler.tick_scheduled(&second, &mut seen).expect("tick"),
        TickStatus::Running { progress: 0.25 }
    );
    assert_eq!(seen, vec![(1, 0.2), (2, 0.25)]);
}

#[test]
fn callback_error_stops_animation() {
    let clock = ManualClock::new();
    let mut scheduler: AnimationScheduler<ManualClock, ()> = AnimationScheduler::new(clock.clone());

    let handle = scheduler.start(1_000.0, |_: &mut (), _| {
        Err(dashboard_charts::ChartError::Backend("surface lost".to_owned()))
    });
    assert!(scheduler.tick(&mut ()).is_err());
    assert!(handle.is_cancelled());
    assert!(!scheduler.is_active());
}

#[test]
fn non_positive_duration_finishes_on_first_tick() {
    for duration in [0.0, -5.0, f64::NAN] {
        let clock = ManualClock::starting_at(42.0);
        let mut scheduler = recording_scheduler(&clock);
        let mut seen = Vec::new();
        scheduler.start(duration, |seen: &mut Vec<f64>, progress| {
            seen.push(progress);
            Ok(())
        });
        assert_eq!(scheduler.tick(&mut seen).expect("tick"), TickStatus::Completed);
        assert_eq!(seen, vec![1.0]);
    }
}

#[test]
fn point_by_point_reveal_steps_through_vertices() {
    let counts: Vec<usize> = [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0]
        .into_iter()
        .map(|fraction| RevealProgress::new(fraction).visible_points(5))
        .collect();
    assert_eq!(counts, vec![1, 1, 2, 3, 4, 5, 5]);
    assert_eq!(RevealProgress::new(0.5).visible_points(0), 0);
    assert_eq!(RevealProgress::new(-1.0).fraction(), 0.0);
    assert!(RevealProgress::new(f64::NAN).is_complete());
}
