use assert_matches::assert_matches;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Utc};

use appointment_cell::models::{AppointmentStatus, AppointmentStore, BookAppointmentRequest};
use appointment_cell::services::{AppointmentLifecycleService, SchedulingService};
use patient_cell::models::{Patient, PatientStore};
use psychologist_cell::models::{
    Availability, AvailabilityStore, Psychologist, PsychologistStore,
};
use shared_models::error::AppError;
use shared_store::Repository;

struct TestContext {
    scheduling: SchedulingService,
    lifecycle: AppointmentLifecycleService,
    psychologists: PsychologistStore,
    patient_id: i64,
    psychologist_id: i64,
}

fn hhmm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// The first Monday strictly after today, so booked dates are always in the
/// future.
fn next_monday() -> NaiveDate {
    let today = Local::now().date_naive();
    let since_monday = today.weekday().num_days_from_monday() as i64;
    today + Duration::days(7 - since_monday)
}

/// Seeds an active psychologist with a Monday 09:00-12:00 window and one
/// patient.
async fn setup() -> TestContext {
    let appointments = AppointmentStore::new();
    let patients = PatientStore::new();
    let psychologists = PsychologistStore::new();
    let availabilities = AvailabilityStore::new();

    let patient = patients
        .add(Patient {
            id: 0,
            name: "Bruno Lima".to_string(),
            email: "bruno@example.com".to_string(),
            phone: "11988887777".to_string(),
            cpf: None,
            created_at: Utc::now(),
        })
        .await;

    let psychologist = psychologists
        .add(Psychologist {
            id: 0,
            user_id: 1,
            name: "Ana Souza".to_string(),
            crp: "06/12345".to_string(),
            specialty: "CBT".to_string(),
            themes: vec![],
            bio: String::new(),
            hourly_rate: 150.0,
            is_active: true,
            created_at: Utc::now(),
        })
        .await;

    availabilities
        .add(Availability {
            id: 0,
            psychologist_id: psychologist.id,
            day_of_week: 0,
            start_time: hhmm(9, 0),
            end_time: hhmm(12, 0),
            is_active: true,
        })
        .await;

    TestContext {
        scheduling: SchedulingService::new(
            appointments.clone(),
            patients.clone(),
            psychologists.clone(),
            availabilities.clone(),
        ),
        lifecycle: AppointmentLifecycleService::new(appointments),
        psychologists,
        patient_id: patient.id,
        psychologist_id: psychologist.id,
    }
}

fn booking(
    ctx: &TestContext,
    date: NaiveDate,
    time: &str,
    duration: i32,
) -> BookAppointmentRequest {
    BookAppointmentRequest {
        patient_id: ctx.patient_id,
        psychologist_id: ctx.psychologist_id,
        date: date.format("%Y-%m-%d").to_string(),
        time: time.to_string(),
        duration,
        notes: None,
    }
}

#[tokio::test]
async fn available_slots_exclude_booked_and_overrunning_starts() {
    let ctx = setup().await;
    let monday = next_monday();

    ctx.scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap();

    let slots = ctx
        .scheduling
        .available_slots(ctx.psychologist_id, &monday.format("%Y-%m-%d").to_string(), 60)
        .await;

    // 15-minute grid, minus the booked 10:00 start, up to the last start
    // whose full hour still fits before 12:00.
    assert_eq!(
        slots,
        vec!["09:00", "09:15", "09:30", "09:45", "10:15", "10:30", "10:45", "11:00"]
    );
}

#[tokio::test]
async fn available_slots_with_unparsable_date_are_empty_not_an_error() {
    let ctx = setup().await;

    let slots = ctx
        .scheduling
        .available_slots(ctx.psychologist_id, "not-a-date", 60)
        .await;

    assert!(slots.is_empty());
}

#[tokio::test]
async fn available_slots_empty_on_day_without_window() {
    let ctx = setup().await;
    let tuesday = next_monday() + Duration::days(1);

    let slots = ctx
        .scheduling
        .available_slots(
            ctx.psychologist_id,
            &tuesday.format("%Y-%m-%d").to_string(),
            60,
        )
        .await;

    assert!(slots.is_empty());
}

#[tokio::test]
async fn available_slots_ignore_cancelled_bookings() {
    let ctx = setup().await;
    let monday = next_monday();

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap();
    ctx.lifecycle.cancel(appointment.id, None).await.unwrap();

    let slots = ctx
        .scheduling
        .available_slots(ctx.psychologist_id, &monday.format("%Y-%m-%d").to_string(), 60)
        .await;

    assert!(slots.contains(&"10:00".to_string()));
}

#[tokio::test]
async fn deactivated_windows_produce_no_slots() {
    let ctx = setup().await;
    let monday = next_monday();

    let availabilities = AvailabilityStore::new();
    let scheduling = SchedulingService::new(
        AppointmentStore::new(),
        PatientStore::new(),
        ctx.psychologists.clone(),
        availabilities.clone(),
    );
    availabilities
        .add(Availability {
            id: 0,
            psychologist_id: ctx.psychologist_id,
            day_of_week: 0,
            start_time: hhmm(9, 0),
            end_time: hhmm(12, 0),
            is_active: false,
        })
        .await;

    let slots = scheduling
        .available_slots(ctx.psychologist_id, &monday.format("%Y-%m-%d").to_string(), 60)
        .await;

    assert!(slots.is_empty());
}

#[tokio::test]
async fn schedule_round_trips_all_fields() {
    let ctx = setup().await;
    let monday = next_monday();

    let mut request = booking(&ctx, monday, "09:30", 45);
    request.notes = Some("first session".to_string());

    let appointment = ctx.scheduling.schedule(request).await.unwrap();

    assert_eq!(appointment.id, 1);
    assert_eq!(appointment.patient_id, ctx.patient_id);
    assert_eq!(appointment.psychologist_id, ctx.psychologist_id);
    assert_eq!(appointment.date, monday);
    assert_eq!(appointment.time, hhmm(9, 30));
    assert_eq!(appointment.duration_minutes, 45);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.notes.as_deref(), Some("first session"));
    assert_eq!(appointment.cancellation_reason, None);

    let fetched = ctx.scheduling.get(appointment.id).await.unwrap();
    assert_eq!(fetched.time, appointment.time);
    assert_eq!(fetched.status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn schedule_rejects_unknown_patient_and_psychologist() {
    let ctx = setup().await;
    let monday = next_monday();

    let mut request = booking(&ctx, monday, "09:00", 60);
    request.patient_id = 999;
    let err = ctx.scheduling.schedule(request).await.unwrap_err();
    assert_matches!(err, AppError::NotFound { resource: "Patient", id: 999 });

    let mut request = booking(&ctx, monday, "09:00", 60);
    request.psychologist_id = 999;
    let err = ctx.scheduling.schedule(request).await.unwrap_err();
    assert_matches!(err, AppError::NotFound { resource: "Psychologist", id: 999 });
}

#[tokio::test]
async fn schedule_rejects_inactive_psychologist() {
    let ctx = setup().await;

    let mut psychologist = ctx.psychologists.get(ctx.psychologist_id).await.unwrap();
    psychologist.is_active = false;
    ctx.psychologists.update(psychologist).await.unwrap();

    let err = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "09:00", 60))
        .await
        .unwrap_err();

    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn schedule_rejects_past_dates_with_date_field() {
    let ctx = setup().await;
    let yesterday = Local::now().date_naive() - Duration::days(1);

    let err = ctx
        .scheduling
        .schedule(booking(&ctx, yesterday, "09:00", 60))
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Validation { field: Some("date"), .. });
}

#[tokio::test]
async fn schedule_rejects_malformed_date_and_time() {
    let ctx = setup().await;

    let mut request = booking(&ctx, next_monday(), "09:00", 60);
    request.date = "07/08/2026".to_string();
    let err = ctx.scheduling.schedule(request).await.unwrap_err();
    assert_matches!(err, AppError::Validation { field: None, .. });

    let mut request = booking(&ctx, next_monday(), "09:00", 60);
    request.time = "9 o'clock".to_string();
    let err = ctx.scheduling.schedule(request).await.unwrap_err();
    assert_matches!(err, AppError::Validation { field: None, .. });
}

#[tokio::test]
async fn schedule_rejects_duration_outside_bounds() {
    let ctx = setup().await;

    for duration in [10, 181] {
        let err = ctx
            .scheduling
            .schedule(booking(&ctx, next_monday(), "09:00", duration))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            AppError::Validation {
                field: Some("duration"),
                ..
            }
        );
    }
}

#[tokio::test]
async fn schedule_rejects_day_without_window() {
    let ctx = setup().await;
    let tuesday = next_monday() + Duration::days(1);

    let err = ctx
        .scheduling
        .schedule(booking(&ctx, tuesday, "09:00", 60))
        .await
        .unwrap_err();

    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn schedule_rejects_time_outside_window() {
    let ctx = setup().await;

    let err = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "08:00", 60))
        .await
        .unwrap_err();

    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn schedule_rejects_booking_overrunning_window_end() {
    let ctx = setup().await;

    // 11:30 starts inside the window but the hour runs past 12:00; the
    // containment check is duration-aware.
    let err = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "11:30", 60))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::BusinessRule(_));

    // The same start with a duration that fits is accepted.
    ctx.scheduling
        .schedule(booking(&ctx, next_monday(), "11:30", 30))
        .await
        .unwrap();
}

#[tokio::test]
async fn schedule_conflicts_on_double_booking() {
    let ctx = setup().await;
    let monday = next_monday();

    ctx.scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap();

    let err = ctx
        .scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Conflict(_));
}

#[tokio::test]
async fn schedule_allows_rebooking_a_cancelled_slot() {
    let ctx = setup().await;
    let monday = next_monday();

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap();
    ctx.lifecycle
        .cancel(appointment.id, Some("patient request".to_string()))
        .await
        .unwrap();

    ctx.scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap();
}

#[tokio::test]
async fn cancel_records_reason_and_is_terminal() {
    let ctx = setup().await;

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "09:00", 60))
        .await
        .unwrap();

    let cancelled = ctx
        .lifecycle
        .cancel(appointment.id, Some("sick".to_string()))
        .await
        .unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(cancelled.cancellation_reason.as_deref(), Some("sick"));

    let err = ctx.lifecycle.cancel(appointment.id, None).await.unwrap_err();
    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn cancel_rejects_completed_appointments() {
    let ctx = setup().await;

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "09:00", 60))
        .await
        .unwrap();
    ctx.lifecycle.complete(appointment.id).await.unwrap();

    let err = ctx.lifecycle.cancel(appointment.id, None).await.unwrap_err();
    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn confirm_only_moves_scheduled_appointments() {
    let ctx = setup().await;

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "09:00", 60))
        .await
        .unwrap();

    let confirmed = ctx.lifecycle.confirm(appointment.id).await.unwrap();
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

    let err = ctx.lifecycle.confirm(appointment.id).await.unwrap_err();
    assert_matches!(err, AppError::BusinessRule(_));

    // A confirmed appointment can still be completed.
    let completed = ctx.lifecycle.complete(appointment.id).await.unwrap();
    assert_eq!(completed.status, AppointmentStatus::Completed);
}

#[tokio::test]
async fn complete_rejects_cancelled_appointments() {
    let ctx = setup().await;

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "09:00", 60))
        .await
        .unwrap();
    ctx.lifecycle.cancel(appointment.id, None).await.unwrap();

    let err = ctx.lifecycle.complete(appointment.id).await.unwrap_err();
    assert_matches!(err, AppError::BusinessRule(_));
}

#[tokio::test]
async fn delete_bypasses_the_status_machine() {
    let ctx = setup().await;

    let appointment = ctx
        .scheduling
        .schedule(booking(&ctx, next_monday(), "09:00", 60))
        .await
        .unwrap();
    ctx.lifecycle.complete(appointment.id).await.unwrap();

    ctx.lifecycle.delete(appointment.id).await.unwrap();

    let err = ctx.scheduling.get(appointment.id).await.unwrap_err();
    assert_matches!(err, AppError::NotFound { resource: "Appointment", .. });
}

#[tokio::test]
async fn list_filters_by_patient_and_psychologist() {
    let ctx = setup().await;
    let monday = next_monday();

    ctx.scheduling
        .schedule(booking(&ctx, monday, "09:00", 60))
        .await
        .unwrap();
    ctx.scheduling
        .schedule(booking(&ctx, monday, "10:00", 60))
        .await
        .unwrap();

    let by_patient = ctx.scheduling.list(Some(ctx.patient_id), None).await;
    assert_eq!(by_patient.len(), 2);

    let by_psychologist = ctx.scheduling.list(None, Some(ctx.psychologist_id)).await;
    assert_eq!(by_psychologist.len(), 2);

    let by_stranger = ctx.scheduling.list(Some(999), None).await;
    assert!(by_stranger.is_empty());
}
