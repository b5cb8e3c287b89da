//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 인프라 컴포넌트(`Database`, `AppConfig`)를 타입별로 보관하는 전역 컨테이너와,
//! 리포지토리/서비스 싱글톤을 시작 시점에 한꺼번에 생성하는 레지스트리입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! main()
//!  ├─ ServiceLocator::set(Arc<AppConfig>)      # 수동 등록
//!  ├─ ServiceLocator::set(Arc<Database>)       # 수동 등록
//!  └─ ServiceLocator::initialize_all()
//!       ├─ RepositoryRegistration 순회 → XxxRepository::instance()
//!       └─ ServiceRegistration 순회    → XxxService::instance()
//!                                          └─ ServiceLocator::get::<AppConfig>()
//! ```
//!
//! 각 리포지토리/서비스는 `OnceCell` 싱글톤과 `inventory::submit!` 등록을 직접
//! 가지고 있으며, 이 모듈은 그 생성자들을 순서대로 호출만 합니다.
//! 리포지토리가 서비스보다 먼저 생성되므로 서비스 생성자는 리포지토리 인스턴스를
//! 바로 사용할 수 있습니다.
//!
//! ## 미등록 타입
//!
//! `get::<T>()`는 등록되지 않은 타입에 대해 패닉합니다. 이는 시작 순서가 잘못된
//! 프로그래밍 오류이며, 요청 처리 중에는 발생하지 않습니다.
//! 존재 여부가 불확실한 경우 `try_get::<T>()`를 사용합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 서비스 자동 등록 항목
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 자동 등록 항목
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 타입 기반 전역 인스턴스 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// `T`가 `set()`으로 등록되지 않았으면 패닉합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => panic!(
                "Service not found: {}. Register it with ServiceLocator::set() before use",
                Self::extract_clean_type_name(std::any::type_name::<T>())
            ),
        }
    }

    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 등록된 모든 리포지토리와 서비스의 싱글톤을 생성합니다.
    ///
    /// 인프라 컴포넌트가 `set()`으로 먼저 등록되어 있어야 합니다.
    pub fn initialize_all() {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");
            for registration in repo_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");
            for registration in service_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(u32);

    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(Marker(7)));

        let first = ServiceLocator::get::<Marker>();
        let second = ServiceLocator::get::<Marker>();

        assert_eq!(first.0, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_try_get_unregistered_is_none() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    fn test_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("chirpy_backend::db::Database"),
            "Database"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("u32"), "u32");
    }
}
