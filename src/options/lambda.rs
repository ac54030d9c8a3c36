use clap::Parser;

#[derive(Debug, Parser)]
pub struct LambdaOpt {
    /// The compute function every data source invokes
    #[arg(long = "lambda-arn", env = "LAMBDA_FUNCTION_ARN")]
    pub lambda_function_arn: String,

    /// The service role the gateway assumes to invoke the function
    #[arg(long = "service-role-arn", env = "SERVICE_ROLE_ARN")]
    pub service_role_arn: String,
}
