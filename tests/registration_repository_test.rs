use courtside::{
    domain::{NewRegistration, PaymentStatus},
    repository::{RegistrationRepository, SqliteRegistrationRepository},
};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

fn adult_monthly_registration() -> NewRegistration {
    NewRegistration {
        full_name: "Thandi Nkosi".to_string(),
        email: "thandi@example.com".to_string(),
        whatsapp: "+27821234567".to_string(),
        plan: "adult-monthly".to_string(),
        description: "Adult Pro - Monthly (R150/mo)".to_string(),
        monthly_rate: 15000,
        first_payment: 24000,
        utr_dupr: Some("4.25".to_string()),
        currency: "ZAR".to_string(),
    }
}

async fn test_repo() -> anyhow::Result<SqliteRegistrationRepository> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(SqliteRegistrationRepository::new(pool))
}

#[tokio::test]
async fn test_create_and_find_registration() -> anyhow::Result<()> {
    let repo = test_repo().await?;

    let registration = repo.create(adult_monthly_registration()).await?;
    assert_eq!(registration.email, "thandi@example.com");
    assert_eq!(registration.plan, "adult-monthly");
    assert_eq!(registration.first_payment, 24000);
    assert_eq!(registration.payment_status, PaymentStatus::Pending);
    assert!(registration.yoco_checkout_id.is_none());
    assert!(registration.confirmed_at.is_none());

    let found = repo.find_by_id(registration.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, registration.id);

    let missing = repo.find_by_id(Uuid::new_v4()).await?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn test_mark_confirmed_stamps_timestamp() -> anyhow::Result<()> {
    let repo = test_repo().await?;

    let registration = repo.create(adult_monthly_registration()).await?;
    repo.mark_confirmed(registration.id).await?;

    let confirmed = repo.find_by_id(registration.id).await?.unwrap();
    assert_eq!(confirmed.payment_status, PaymentStatus::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    Ok(())
}

#[tokio::test]
async fn test_set_checkout_id() -> anyhow::Result<()> {
    let repo = test_repo().await?;

    let registration = repo.create(adult_monthly_registration()).await?;
    repo.set_checkout_id(registration.id, "ch_abc123").await?;

    let updated = repo.find_by_id(registration.id).await?.unwrap();
    assert_eq!(updated.yoco_checkout_id.as_deref(), Some("ch_abc123"));
    // Attaching a session id does not advance the payment status.
    assert_eq!(updated.payment_status, PaymentStatus::Pending);

    Ok(())
}

#[tokio::test]
async fn test_optional_utr_dupr_round_trips_as_null() -> anyhow::Result<()> {
    let repo = test_repo().await?;

    let mut request = adult_monthly_registration();
    request.utr_dupr = None;

    let registration = repo.create(request).await?;
    let found = repo.find_by_id(registration.id).await?.unwrap();
    assert!(found.utr_dupr.is_none());

    Ok(())
}
