//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작과 레지스트리 초기화 과정을 콘솔에 표시합니다.
//! 요청 처리 중의 로그는 `log` 매크로를 사용하며 이 모듈을 거치지 않습니다.

/// 박스 너비 (테두리 제외)
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: ...`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: ... (N items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 하위 작업 상태
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 서버 시작 배너
///
/// 바인딩 주소와 실행 환경, 노출되는 엔드포인트를 한 번에 보여줍니다.
pub fn print_server_banner(bind_address: &str, platform: &str, routes: &[(&str, &str)]) {
    print_boxed_title("🐦 CHIRPY SERVER");
    println!("   📍 Listening: http://{}", bind_address);
    println!("   🌍 Platform: {}", platform);
    println!();
    for (method, path) in routes {
        print_sub_task(method, path);
    }
    println!();
}
