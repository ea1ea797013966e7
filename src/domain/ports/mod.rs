//! Port trait definitions (Hexagonal Architecture)
//!
//! One `#[async_trait]` contract per capability provider. The core consumes
//! these behind `Arc<dyn …>` and stays decoupled from any particular model
//! or search backend:
//! - Planner: authors and revises research plans
//! - Researcher: executes one research iteration
//! - Evaluator: scores a result on the six axes
//! - SingleShotSearcher: one-pass broad search
//! - Comparator: qualitative comparison narrative
//! - FactChecker: source verification
//! - PlanReviewer: the human confirmation checkpoint

pub mod comparator;
pub mod evaluator;
pub mod fact_checker;
pub mod plan_reviewer;
pub mod planner;
pub mod researcher;
pub mod single_shot;

pub use comparator::Comparator;
pub use evaluator::Evaluator;
pub use fact_checker::FactChecker;
pub use plan_reviewer::{PlanReview, PlanReviewer};
pub use planner::{PlanRevision, Planner};
pub use researcher::Researcher;
pub use single_shot::SingleShotSearcher;
