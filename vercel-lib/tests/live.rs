//! Integration tests against the real Vercel API.
//!
//! These tests require a token and are ignored by default. To run them,
//! create a `.env` file in the vercel-lib directory with:
//!
//! ```env
//! VERCEL_TOKEN=your-token
//! ```
//!
//! Then run: `cargo test -p vercel-lib -- --ignored`

use std::env;

use vercel_lib::{FetchError, fetch_with_auth};

fn load_token() -> Option<String> {
    let _ = dotenvy::dotenv();
    env::var("VERCEL_TOKEN").ok()
}

#[tokio::test]
#[ignore]
async fn test_list_projects() {
    let Some(token) = load_token() else {
        eprintln!("Skipping: VERCEL_TOKEN not set");
        return;
    };

    let body: serde_json::Value = fetch_with_auth(("v9/projects", token.as_str()), None)
        .await
        .unwrap();
    assert!(body.get("projects").is_some_and(|p| p.is_array()));
}

#[tokio::test]
#[ignore]
async fn test_bad_token_is_forbidden() {
    let _ = dotenvy::dotenv();

    let err = fetch_with_auth::<serde_json::Value>(("v2/user", "not-a-token"), None)
        .await
        .unwrap_err();
    match err {
        FetchError::Http { status, info, .. } => {
            assert_eq!(status, 403);
            assert!(info.get("error").is_some());
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}
