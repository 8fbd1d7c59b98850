//! Blue/Green Deploy record

use crate::core::record::{ConfigRecord, FieldSpec, Variant};
use crate::template::{builtin, Template};
use serde::{Deserialize, Serialize};

/// Field values for the dual-environment blue/green pipeline
///
/// The load balancer, target group, instance and address fields describe the
/// two environments. The generated pipeline reads those values from the
/// parameter store under `ssm_prefix` at run time, so they are recorded here
/// but do not change the rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlueGreenRecord {
    pub docker_image: String,
    pub python_agent: String,
    pub coverage: String,
    pub aws_region: String,
    pub ssm_prefix: String,
    pub alb_listener_arn: String,
    pub alb_rule_arn: String,
    pub blue_tg_arn: String,
    pub green_tg_arn: String,
    pub blue_ip: String,
    pub blue_instance_id: String,
    pub green_ip: String,
    pub green_instance_id: String,
    pub docker_creds: String,
    pub ssh_creds: String,
    pub slack_creds: String,
    pub alb_dns: String,
}

impl ConfigRecord for BlueGreenRecord {
    const VARIANT: Variant = Variant::BlueGreen;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "dockerImage",
            label: "Docker image",
            description: "Image name, tagged with the build number and latest",
        },
        FieldSpec {
            name: "pythonAgent",
            label: "Python agent image",
            description: "Docker image the test and coverage stages run in",
        },
        FieldSpec {
            name: "coverage",
            label: "Coverage threshold",
            description: "Minimum line coverage percentage for the coverage check",
        },
        FieldSpec {
            name: "awsRegion",
            label: "AWS region",
            description: "Region of the load balancer, instances and parameters",
        },
        FieldSpec {
            name: "ssmPrefix",
            label: "SSM prefix",
            description: "Parameter store prefix holding infrastructure identifiers and app secrets",
        },
        FieldSpec {
            name: "albListenerArn",
            label: "ALB listener ARN",
            description: "Listener in front of both environments (read from SSM at run time)",
        },
        FieldSpec {
            name: "albRuleArn",
            label: "ALB rule ARN",
            description: "Listener rule switched between target groups (read from SSM at run time)",
        },
        FieldSpec {
            name: "blueTgArn",
            label: "Blue target group ARN",
            description: "Target group of the blue environment (read from SSM at run time)",
        },
        FieldSpec {
            name: "greenTgArn",
            label: "Green target group ARN",
            description: "Target group of the green environment (read from SSM at run time)",
        },
        FieldSpec {
            name: "blueIp",
            label: "Blue server IP",
            description: "Address of the blue instance (read from SSM at run time)",
        },
        FieldSpec {
            name: "blueInstanceId",
            label: "Blue instance ID",
            description: "EC2 instance of the blue environment (read from SSM at run time)",
        },
        FieldSpec {
            name: "greenIp",
            label: "Green server IP",
            description: "Address of the green instance (read from SSM at run time)",
        },
        FieldSpec {
            name: "greenInstanceId",
            label: "Green instance ID",
            description: "EC2 instance of the green environment (read from SSM at run time)",
        },
        FieldSpec {
            name: "dockerCreds",
            label: "Docker Hub credentials ID",
            description: "Jenkins username/password credential for Docker Hub",
        },
        FieldSpec {
            name: "sshCreds",
            label: "SSH credentials ID",
            description: "Jenkins SSH agent credential for both instances",
        },
        FieldSpec {
            name: "slackCreds",
            label: "Slack credentials ID",
            description: "Jenkins secret text credential holding the Slack webhook URL",
        },
        FieldSpec {
            name: "albDns",
            label: "ALB DNS name",
            description: "Public DNS name of the load balancer (read from SSM at run time)",
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "dockerImage" => &self.docker_image,
            "pythonAgent" => &self.python_agent,
            "coverage" => &self.coverage,
            "awsRegion" => &self.aws_region,
            "ssmPrefix" => &self.ssm_prefix,
            "albListenerArn" => &self.alb_listener_arn,
            "albRuleArn" => &self.alb_rule_arn,
            "blueTgArn" => &self.blue_tg_arn,
            "greenTgArn" => &self.green_tg_arn,
            "blueIp" => &self.blue_ip,
            "blueInstanceId" => &self.blue_instance_id,
            "greenIp" => &self.green_ip,
            "greenInstanceId" => &self.green_instance_id,
            "dockerCreds" => &self.docker_creds,
            "sshCreds" => &self.ssh_creds,
            "slackCreds" => &self.slack_creds,
            "albDns" => &self.alb_dns,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "dockerImage" => Some(&mut self.docker_image),
            "pythonAgent" => Some(&mut self.python_agent),
            "coverage" => Some(&mut self.coverage),
            "awsRegion" => Some(&mut self.aws_region),
            "ssmPrefix" => Some(&mut self.ssm_prefix),
            "albListenerArn" => Some(&mut self.alb_listener_arn),
            "albRuleArn" => Some(&mut self.alb_rule_arn),
            "blueTgArn" => Some(&mut self.blue_tg_arn),
            "greenTgArn" => Some(&mut self.green_tg_arn),
            "blueIp" => Some(&mut self.blue_ip),
            "blueInstanceId" => Some(&mut self.blue_instance_id),
            "greenIp" => Some(&mut self.green_ip),
            "greenInstanceId" => Some(&mut self.green_instance_id),
            "dockerCreds" => Some(&mut self.docker_creds),
            "sshCreds" => Some(&mut self.ssh_creds),
            "slackCreds" => Some(&mut self.slack_creds),
            "albDns" => Some(&mut self.alb_dns),
            _ => None,
        }
    }

    fn builtin_template() -> &'static Template {
        &builtin::BLUE_GREEN
    }
}
