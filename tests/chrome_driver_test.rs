use elibrary_harvest::browser::launch_browser;
use elibrary_harvest::infrastructure::{ChromeDriver, PageDriver};
use elibrary_harvest::models::Cookie;
use elibrary_harvest::Config;
use tokio_test::assert_ok;

/// 需要本机安装 Chrome: cargo test -- --ignored
#[tokio::test]
#[ignore]
async fn test_chrome_driver_cookie_round_trip() {
    let config = Config {
        headless: true,
        ..Config::default()
    };
    let (_browser, page) = launch_browser(&config).await.unwrap();
    let driver = ChromeDriver::new(page);

    let navigation = assert_ok!(driver.navigate("https://example.com/").await);
    assert!(navigation.url.starts_with("https://example.com"));

    let cookie = Cookie {
        expires: Some(4102444800.0),
        ..Cookie::new("SUserID", "42", "example.com")
    };
    assert_ok!(driver.set_cookies(&[cookie]).await);

    let cookies = assert_ok!(driver.cookies().await);
    let stored = cookies
        .iter()
        .find(|c| c.name == "SUserID")
        .expect("cookie should be stored");
    assert_eq!(stored.value, "42");
    assert_eq!(stored.path, "/");
    assert!(stored.expires.is_some());
}
