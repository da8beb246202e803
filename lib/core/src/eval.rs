use crate::cnf::clause::Clause;
use crate::cnf::Cnf;
use crate::lit::Lit;
use crate::model::Model;

pub trait Eval {
    type Output;

    fn eval(&self, model: &Model) -> Self::Output;
}

impl Eval for Lit {
    type Output = bool;

    fn eval(&self, model: &Model) -> Self::Output {
        model.value(*self)
    }
}

impl Eval for Clause {
    type Output = bool;

    fn eval(&self, model: &Model) -> Self::Output {
        self.iter().any(|lit| lit.eval(model))
    }
}

impl Eval for Cnf {
    type Output = bool;

    fn eval(&self, model: &Model) -> Self::Output {
        self.iter().all(|clause| clause.eval(model))
    }
}

impl<E> Eval for [E]
where
    E: Eval,
{
    type Output = Vec<E::Output>;

    fn eval(&self, model: &Model) -> Self::Output {
        self.iter().map(|e| e.eval(model)).collect()
    }
}
