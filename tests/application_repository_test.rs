mod common;

use job_board_backend::dto::job_dto::CreateJobPayload;
use job_board_backend::models::application::Application;
use job_board_backend::repositories::{
    application_repository::ApplicationRepository, job_repository::JobRepository,
};
use tokio::task::JoinSet;

async fn seed_job(pool: &sqlx::PgPool) -> i32 {
    let handle = common::unique("c");
    common::seed_company(pool, &handle).await;
    JobRepository::new(pool.clone())
        .create(CreateJobPayload {
            title: "testApplicationjob".into(),
            salary: Some(100),
            equity: Some("0.1".parse().unwrap()),
            company_handle: handle,
        })
        .await
        .expect("seed job")
        .id
}

#[tokio::test]
async fn applying_twice_is_a_conflict() {
    let Some(pool) = common::test_pool().await else { return };
    let username = common::unique("u");
    common::seed_user(&pool, &username, false).await;
    let job_id = seed_job(&pool).await;
    let repo = ApplicationRepository::new(pool.clone());

    let application = repo.create(&username, job_id).await.unwrap();
    assert_eq!(
        application,
        Application {
            username: username.clone(),
            job_id
        }
    );

    let stored: Vec<(String, i32)> =
        sqlx::query_as("SELECT username, job_id FROM applications WHERE username = $1")
            .bind(&username)
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(stored, vec![(username.clone(), job_id)]);

    let err = repo.create(&username, job_id).await.unwrap_err();
    assert!(err.is_conflict(), "expected conflict, got {:?}", err);
    assert!(repo.exists(&username, job_id).await.unwrap());
}

#[tokio::test]
async fn unknown_user_or_job_is_not_found() {
    let Some(pool) = common::test_pool().await else { return };
    let username = common::unique("u");
    common::seed_user(&pool, &username, false).await;
    let job_id = seed_job(&pool).await;
    let repo = ApplicationRepository::new(pool);

    let err = repo.create(&common::unique("ghost"), job_id).await.unwrap_err();
    assert!(err.is_not_found(), "expected not found, got {:?}", err);

    let err = repo.create(&username, -1).await.unwrap_err();
    assert!(err.is_not_found(), "expected not found, got {:?}", err);
    assert!(!repo.exists(&username, -1).await.unwrap());
}

#[tokio::test]
async fn concurrent_applications_record_once() {
    let Some(pool) = common::test_pool().await else { return };
    let username = common::unique("u");
    common::seed_user(&pool, &username, false).await;
    let job_id = seed_job(&pool).await;
    let repo = ApplicationRepository::new(pool.clone());

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let repo = repo.clone();
        let username = username.clone();
        tasks.spawn(async move { repo.create(&username, job_id).await });
    }

    let mut recorded = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined.unwrap() {
            Ok(_) => recorded += 1,
            Err(err) => assert!(err.is_conflict(), "expected conflict, got {:?}", err),
        }
    }
    assert_eq!(recorded, 1);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE username = $1")
        .bind(&username)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
