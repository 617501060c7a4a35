//! Solidity ABI definitions of the three permit entrypoints.
//!
//! The canonical encoding of a permit is the ABI-encoded parameter list of one of these calls
//! (without the selector).

use alloy_sol_types::sol;

sol! {
    #![sol(all_derives)]

    /// ERC-2612.
    interface IERC20Permit {
        function permit(
            address owner,
            address spender,
            uint256 value,
            uint256 deadline,
            uint8 v,
            bytes32 r,
            bytes32 s
        ) external;
    }

    /// DAI and tokens that copied its pre-2612 permit.
    interface IDaiLikePermit {
        function permit(
            address holder,
            address spender,
            uint256 nonce,
            uint256 expiry,
            bool allowed,
            uint8 v,
            bytes32 r,
            bytes32 s
        ) external;
    }

    /// Uniswap Permit2 `IAllowanceTransfer`.
    interface IPermit2 {
        struct PermitDetails {
            address token;
            uint160 amount;
            uint48 expiration;
            uint48 nonce;
        }

        struct PermitSingle {
            PermitDetails details;
            address spender;
            uint256 sigDeadline;
        }

        function permit(address owner, PermitSingle permitSingle, bytes signature) external;
    }
}
