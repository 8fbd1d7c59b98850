//! Simple Deploy record

use crate::core::record::{ConfigRecord, FieldSpec, Variant};
use crate::template::{builtin, Template};
use serde::{Deserialize, Serialize};

/// Field values for the single-environment build/push/deploy pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimpleDeployRecord {
    pub docker_image: String,
    pub docker_creds_id: String,
    pub ssh_creds_id: String,
    pub aws_region: String,
    pub ssm_secret_path: String,
    pub ssm_config_path: String,
    pub app_dir: String,
    pub log_group_name: String,
}

impl ConfigRecord for SimpleDeployRecord {
    const VARIANT: Variant = Variant::Simple;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "dockerImage",
            label: "Docker image",
            description: "Docker Hub repository the image is built and pushed as",
        },
        FieldSpec {
            name: "dockerCredsId",
            label: "Docker Hub credentials ID",
            description: "Jenkins username/password credential for Docker Hub",
        },
        FieldSpec {
            name: "sshCredsId",
            label: "SSH credentials ID",
            description: "Jenkins SSH private key credential for the target server",
        },
        FieldSpec {
            name: "awsRegion",
            label: "AWS region",
            description: "Region of the SSM parameters",
        },
        FieldSpec {
            name: "ssmSecretPath",
            label: "SSM secret path",
            description: "Parameter path prefix whose entries become the .env file",
        },
        FieldSpec {
            name: "ssmConfigPath",
            label: "SSM config path",
            description: "Parameter path prefix holding server IP, user and CloudFront settings",
        },
        FieldSpec {
            name: "appDir",
            label: "Application directory",
            description: "Directory on the server that receives compose files and .env",
        },
        FieldSpec {
            name: "logGroupName",
            label: "CloudWatch log group",
            description: "Log group the CloudWatch agent ships container logs to",
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "dockerImage" => &self.docker_image,
            "dockerCredsId" => &self.docker_creds_id,
            "sshCredsId" => &self.ssh_creds_id,
            "awsRegion" => &self.aws_region,
            "ssmSecretPath" => &self.ssm_secret_path,
            "ssmConfigPath" => &self.ssm_config_path,
            "appDir" => &self.app_dir,
            "logGroupName" => &self.log_group_name,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "dockerImage" => Some(&mut self.docker_image),
            "dockerCredsId" => Some(&mut self.docker_creds_id),
            "sshCredsId" => Some(&mut self.ssh_creds_id),
            "awsRegion" => Some(&mut self.aws_region),
            "ssmSecretPath" => Some(&mut self.ssm_secret_path),
            "ssmConfigPath" => Some(&mut self.ssm_config_path),
            "appDir" => Some(&mut self.app_dir),
            "logGroupName" => Some(&mut self.log_group_name),
            _ => None,
        }
    }

    fn builtin_template() -> &'static Template {
        &builtin::SIMPLE
    }
}
