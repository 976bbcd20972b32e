
use evaluation::{EvalConfig, EvalKind, Evaluator};

pub(crate) fn evaluator(kind: EvalKind) -> Evaluator {
    Evaluator::new(kind.build(EvalConfig::default()))
}
