//! Embedded example authentication router
//!
//! Shows what protected routes look like in practice: registration, login,
//! and a token-verified endpoint. Shipped as a template asset and written
//! out verbatim by the `example` command.

/// Canonical filename of the example router
pub const EXAMPLE_ROUTER_FILE: &str = "userRouter.ts";

/// Source text of the example authentication router
pub const EXAMPLE_ROUTER: &str = include_str!("../../../../templates/userRouter.ts");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_covers_register_login_verify() {
        assert!(EXAMPLE_ROUTER.contains("userRouter.post('/'"));
        assert!(EXAMPLE_ROUTER.contains("userRouter.post('/login'"));
        assert!(EXAMPLE_ROUTER.contains("userRouter.get('/verify'"));
    }

    #[test]
    fn test_example_reads_secret_at_request_time() {
        // The signing secret comes from the environment inside the handlers,
        // not at module load.
        assert!(EXAMPLE_ROUTER.contains("process.env.JWT_SECRET"));
    }

    #[test]
    fn test_example_guards_with_verify_token() {
        assert!(EXAMPLE_ROUTER.contains("userRouter.get('/verify', verifyToken"));
    }

    #[test]
    fn test_example_is_a_module() {
        assert!(EXAMPLE_ROUTER.contains("export default userRouter;"));
    }
}
