use snafu::Snafu;

pub type Result<T, E = SolverError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SolverError {
    #[snafu(display("Literal must be non-zero"))]
    ZeroLiteral,

    #[snafu(display("Variable {} does not fit into a literal", var))]
    VariableOutOfRange { var: u32 },

    #[snafu(display("Zero literal at position {} in clause", position))]
    ZeroLiteralInClause { position: usize },

    #[snafu(display("Cannot draw {} literals per clause from {} variables", k, num_vars))]
    InvalidInstance { num_vars: usize, k: usize },
}
