/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by every AWS service crate: regions and the process-environment shim used to
//! resolve them.

pub mod os_shim_internal;
pub mod region;
