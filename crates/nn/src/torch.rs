use std::path::Path;

use ndarray::Array3;
use tch::{CModule, Device, IValue, Kind, Tensor};

/// TorchScript policy/value network
pub struct NnModel {
    module: CModule,
    device: Device,
}

impl NnModel {
    pub fn load<P: AsRef<Path>>(path: P, device: Device) -> tch::Result<Self> {
        let module = CModule::load_on_device(path, device)?;
        Ok(Self { module, device })
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn forward(&self, x: &Tensor) -> tch::Result<(Tensor, Tensor)> {
        let input_ivalue = IValue::Tensor(x.shallow_clone());
        let iv = self.module.forward_is(&[input_ivalue])?;

        match iv {
            IValue::Tuple(mut elems) => {
                if elems.len() != 2 {
                    return Err(tch::TchError::Kind("Expected tuple of length 2".into()));
                }
                let value_iv = elems.pop();
                let policy_iv = elems.pop();
                match (policy_iv, value_iv) {
                    (Some(p), Some(v)) => Ok((tensor_from_ivalue(p)?, tensor_from_ivalue(v)?)),
                    _ => Err(tch::TchError::Kind("Expected tuple of length 2".into())),
                }
            }
            _ => Err(tch::TchError::Kind(
                "Expected TorchScript output to be a tuple".into(),
            )),
        }
    }

    /// Run one encoded position through the network.
    ///
    /// The prior is returned as the network emits it; callers check its length.
    pub fn predict(&self, planes: &Array3<f32>) -> tch::Result<(Vec<f32>, f32)> {
        let shape: Vec<i64> = std::iter::once(1)
            .chain(planes.shape().iter().map(|&d| d as i64))
            .collect();
        let data: Vec<f32> = planes.iter().copied().collect();
        let input = Tensor::from_slice(&data).view(shape.as_slice()).to_device(self.device);

        let (policy, value) = self.forward(&input)?;
        let policy = policy.squeeze().to_kind(Kind::Float).to_device(Device::Cpu);
        let value = value.squeeze().to_kind(Kind::Float).to_device(Device::Cpu);

        let len = policy.numel();
        let mut prior = vec![0f32; len];
        policy.copy_data(&mut prior, len);

        if value.numel() != 1 {
            return Err(tch::TchError::Kind(format!(
                "Expected scalar value, got shape {:?}",
                value.size()
            )));
        }
        let mut v = [0f32; 1];
        value.copy_data(&mut v, 1);

        Ok((prior, v[0]))
    }
}

fn tensor_from_ivalue(iv: IValue) -> tch::Result<Tensor> {
    match iv {
        IValue::Tensor(t) => Ok(t),
        other => Err(tch::TchError::Kind(format!(
            "Expected Tensor, got {other:?}"
        ))),
    }
}
